//! Platform-side error type
//!
//! The simulation never fails; everything here comes from the host: settings
//! storage, GPU setup and the native event loop.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AxeGameError {
    #[error("could not read or write settings")]
    SettingsIo(#[from] std::io::Error),
    #[error("settings are not valid JSON")]
    SettingsFormat(#[from] serde_json::Error),
    #[error("could not create a drawing surface")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("could not open the graphics device")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    EventLoop(#[from] winit::error::EventLoopError),
    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Window(#[from] winit::error::OsError),
}
