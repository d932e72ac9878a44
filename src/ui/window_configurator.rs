use iced_winit::settings::SettingsWindowConfigurator;
use iced_winit::winit::dpi::{LogicalSize, PhysicalPosition};
use iced_winit::winit::event_loop::EventLoopWindowTarget;
use iced_winit::winit::window::WindowBuilder;

/// Places the fixed size form in the middle of the primary monitor.
#[derive(Debug)]
pub struct MyWindowConfigurator {
    pub base: SettingsWindowConfigurator,
}

impl<A> iced_winit::window_configurator::WindowConfigurator<A> for MyWindowConfigurator {
    fn configure_builder(
        self,
        window_target: &EventLoopWindowTarget<A>,
        window_builder: WindowBuilder,
    ) -> WindowBuilder {
        let (width, height) = self.base.window.size;
        let window_builder = self.base.configure_builder(window_target, window_builder);
        let window_builder = platform_specific(window_builder)
            .with_resizable(false)
            .with_decorations(true);

        let monitor = window_target
            .primary_monitor()
            .or_else(|| window_target.available_monitors().next());

        match monitor {
            Some(monitor) => {
                let window_size = LogicalSize::new(width as f64, height as f64)
                    .to_physical::<i32>(monitor.scale_factor());
                let area = monitor.size();
                let origin = monitor.position();
                let x = origin.x + (area.width as i32 - window_size.width).max(0) / 2;
                let y = origin.y + (area.height as i32 - window_size.height).max(0) / 2;
                window_builder.with_position(PhysicalPosition::new(x, y))
            }
            None => window_builder,
        }
    }
}

#[cfg(target_os = "linux")]
fn platform_specific(window_builder: WindowBuilder) -> WindowBuilder {
    use iced_winit::winit::platform::unix::WindowBuilderExtUnix;
    window_builder.with_app_id("teledays".to_string())
}

#[cfg(not(target_os = "linux"))]
fn platform_specific(window_builder: WindowBuilder) -> WindowBuilder {
    window_builder
}
