// src/main.rs

mod app;
mod engine_lib;
mod error;
mod rendering_lib;
mod ui;

use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};
use app::RaycastApp;
use error::AppError;
use room_raycaster::RaycastConfig;

pub async fn run() -> Result<(), AppError> {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            let _ = console_log::init_with_level(log::Level::Warn);
        } else {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .init();
        }
    }

    let raycast_config = RaycastConfig::default();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(raycast_config.window_title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                raycast_config.initial_width,
                raycast_config.initial_height,
            ))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id("wasm-viewport")?;
                let canvas = web_sys::Element::from(window.canvas()?);
                dst.append_child(&canvas).ok()?;
                Some(())
            })
            .ok_or(AppError::Canvas)?;
    }

    let mut app_state = RaycastApp::new(window.clone(), raycast_config).await?;
    log::info!("Window ready at {:?}", app_state.get_size());

    event_loop.run(move |event, target: &EventLoopWindowTarget<()>| {
        target.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if !app_state.handle_window_event(event, &window) {
                    match event {
                        WindowEvent::CloseRequested => {
                            target.exit();
                        }
                        WindowEvent::Resized(physical_size) => {
                            app_state.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => { /* In AboutToWait */ }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app_state.update();
                match app_state.render(&window) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        app_state.resize(app_state.get_size());
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        target.exit();
                    }
                    Err(e) => log::warn!("Surface error: {:?}", e),
                }

                if !target.exiting() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            log::error!("{}", e);
        }
    });
}
