use iced_core::Padding;
use iced_winit::settings::SettingsWindowConfigurator;
use iced_winit::widget::Container;
use iced_winit::{Command, Element, Mode, Subscription};

use crate::calc::TimeInput;
use crate::conf::{update_settings, workday_duration, MainAction, SettingsRef};
use crate::parsing::format_workday;
use crate::ui::conversion_form::ConversionForm;
use crate::ui::error_notice::ErrorNotice;
use crate::ui::keyboard_handler::global_keyboard_handler;
use crate::ui::window_configurator::MyWindowConfigurator;

pub use message::{Field, Message};

mod conversion_form;
mod error_notice;
mod focus_handler;
mod keyboard_handler;
mod message;
mod number_input;
mod style;
mod util;
mod window_configurator;

pub const WINDOW_TITLE: &str = "Convertir teletrabajo a días de jornada";

/// Runs the conversion form until the window is closed. Returns the settings
/// as they were left by the form.
pub fn show_ui(main_action: MainAction) -> anyhow::Result<SettingsRef> {
    let config_settings = main_action.settings.clone();
    let window_configurator = MyWindowConfigurator {
        base: SettingsWindowConfigurator {
            window: iced_winit::settings::Window {
                size: (style::WINDOW_WIDTH, style::WINDOW_HEIGHT),
                resizable: false,
                ..Default::default()
            },
            id: Some("teledays".to_string()),
            mode: Mode::Windowed,
        },
    };
    let renderer_settings = iced_wgpu::Settings {
        antialiasing: Some(iced_wgpu::settings::Antialiasing::MSAAx4),
        ..iced_wgpu::Settings::from_env()
    };
    iced_winit::application::run_with_window_configurator::<
        Teledays,
        iced_futures::executor::Smol,
        iced_wgpu::window::Compositor,
        _,
    >(main_action, renderer_settings, window_configurator, true)
    .map_err(|e| anyhow::anyhow!("Failed to run the user interface: {:?}", e))?;

    Ok(config_settings)
}

pub struct Teledays {
    settings: SettingsRef,
    form: Box<ConversionForm>,
    notice: Option<ErrorNotice>,
    exit: bool,
}

pub type QRenderer = iced_wgpu::Renderer;
pub type QElement<'a> = Element<'a, Message, QRenderer>;

impl Teledays {
    fn remember_workday(&mut self, workday: TimeInput) {
        let settings = self.settings.load();
        if !settings.write_settings || settings.workday_input() == workday {
            return;
        }
        match workday_duration(workday) {
            Some(duration) => {
                log::info!("Workday changed to {}", format_workday(workday));
                update_settings(&self.settings, |s| s.workday = duration);
            }
            None => log::warn!("Workday {} is too long to be stored", format_workday(workday)),
        }
    }
}

impl iced_winit::Program for Teledays {
    type Renderer = QRenderer;
    type Message = Message;

    fn update(&mut self, message: Message) -> Command<Message> {
        let mut message = Some(message);
        while let Some(current) = message.take() {
            match current {
                Message::ShowError(e) => {
                    log::warn!("{}: {}", e.title(), e);
                    self.notice = Some(ErrorNotice::for_error(&e));
                }
                Message::Calculated { workday } => self.remember_workday(workday),
                m => {
                    if let Some(notice) = &mut self.notice {
                        if let Some(Message::DismissNotice) = notice.update(m) {
                            self.notice = None;
                        }
                    } else {
                        match m {
                            Message::Exit => self.exit = true,
                            Message::DismissNotice => {}
                            m => message = self.form.update(m),
                        }
                    }
                }
            }
        }
        Command::none()
    }

    fn view(&mut self) -> Element<'_, Self::Message, Self::Renderer> {
        let content = match &mut self.notice {
            Some(notice) => notice.view(),
            None => self.form.view(),
        };
        Container::new(content)
            .padding(Padding::new(style::WINDOW_PADDING))
            .into()
    }
}

impl iced_winit::Application for Teledays {
    type Flags = MainAction;

    fn new(flags: MainAction) -> (Self, Command<Message>) {
        let workday = flags.settings.load().workday_input();
        let teledays = Teledays {
            settings: flags.settings,
            form: ConversionForm::new(workday),
            notice: None,
            exit: false,
        };

        (teledays, Command::none())
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn should_exit(&self) -> bool {
        self.exit
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        iced_winit::subscription::events_with(global_keyboard_handler)
    }
}
