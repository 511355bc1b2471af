use crate::config::{self, DialConfig};
use crate::events::AppEvent;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::thumb::DialThumb;
use crate::gui::view;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;
use relm4::prelude::*;
use seekarc::{Dp, Padding, Point, SeekArc, SeekArcListener, TouchEvent, Viewport};
use std::cell::RefCell;
use std::rc::Rc;

/// Logs progress changes; the label itself is synced from the model.
struct ChangeLog;

impl SeekArcListener for ChangeLog {
    fn on_progress_changed(&mut self, progress: u32, from_user: bool) {
        log::debug!("progress -> {} (from_user: {})", progress, from_user);
    }

    fn on_start_tracking_touch(&mut self) {
        log::debug!("tracking started");
    }

    fn on_stop_tracking_touch(&mut self) {
        log::debug!("tracking stopped");
    }
}

pub struct AppModel {
    pub arc: Rc<RefCell<SeekArc<DialThumb>>>,
    pub value: u32,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Press(f64, f64),
    Motion(f64, f64),
    Release,
    Resize(i32, i32),
    Nudge(i32),
    SetProgress(u32),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::SetProgress(value) => AppMsg::SetProgress(value),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (DialConfig, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Arc Dial"),
            set_default_size: (360, 360),
            add_css_class: "arcdial-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    match key {
                        gtk::gdk::Key::Up | gtk::gdk::Key::Right => {
                            sender.input(AppMsg::Nudge(1));
                            glib::Propagation::Stop
                        }
                        gtk::gdk::Key::Down | gtk::gdk::Key::Left => {
                            sender.input(AppMsg::Nudge(-1));
                            glib::Propagation::Stop
                        }
                        _ => glib::Propagation::Proceed,
                    }
                }
            },

            gtk::Overlay {
                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "arcdial-drawing-area",

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(width, height));
                    },

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, x, y| {
                            sender.input(AppMsg::Press(x, y));
                        },
                        connect_drag_update[sender] => move |gesture, dx, dy| {
                            if let Some((x, y)) = gesture.start_point() {
                                sender.input(AppMsg::Motion(x + dx, y + dy));
                            }
                        },
                        connect_drag_end[sender] => move |_, _, _| {
                            sender.input(AppMsg::Release);
                        }
                    }
                },

                add_overlay = &gtk::Label {
                    add_css_class: "arcdial-value",
                    set_halign: gtk::Align::Center,
                    set_valign: gtk::Align::Center,
                    set_can_target: false,
                    #[watch]
                    set_label: &model.value.to_string(),
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (dial_config, rx) = init;

        theme::load_css();
        let colors = ThemeColors::from_context(&root.style_context());
        let density = root.scale_factor() as f64;

        let thumb = DialThumb::from_config(&dial_config.thumb, &colors, density);
        let mut arc = SeekArc::with_thumb(dial_config.arc.settings(&colors, density), thumb);
        if let Some(width) = dial_config.thumb.stroke_width {
            let color = dial_config
                .thumb
                .stroke_color
                .map(Srgba::from)
                .unwrap_or(colors.fill);
            arc.set_thumb_stroke(Dp(width), color, density);
        }
        arc.set_listener(ChangeLog);

        let value = arc.progress();
        let arc = Rc::new(RefCell::new(arc));

        let model = AppModel {
            arc: arc.clone(),
            value,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let arc_draw = arc.clone();
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            let arc = arc_draw.borrow();
            if let Err(e) = view::draw(cr, &seekarc::frame(&arc), arc.thumb()) {
                log::error!("Drawing error: {}", e);
            }
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Press(x, y) => self.touch(TouchEvent::Down(Point::new(x, y))),
            AppMsg::Motion(x, y) => self.touch(TouchEvent::Move(Point::new(x, y))),
            AppMsg::Release => self.touch(TouchEvent::Up),
            AppMsg::Resize(width, height) => {
                self.arc.borrow_mut().resize(Viewport {
                    width: width as f64,
                    height: height as f64,
                    padding: Padding::default(),
                });
                self.drawing_area.queue_draw();
            }
            AppMsg::Nudge(delta) => {
                let mut arc = self.arc.borrow_mut();
                let next = arc.progress().saturating_add_signed(delta);
                arc.set_progress(next);
                drop(arc);
                self.sync_value();
                self.drawing_area.queue_draw();
            }
            AppMsg::SetProgress(value) => {
                self.arc.borrow_mut().set_progress(value);
                self.sync_value();
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfigReload => {
                match config::load_config(None) {
                    Ok(new_config) => {
                        let colors = ThemeColors::from_context(&self.root.style_context());
                        let density = self.root.scale_factor() as f64;
                        self.arc
                            .borrow_mut()
                            .apply_settings(new_config.arc.settings(&colors, density));
                        self.sync_value();
                        self.drawing_area.queue_draw();
                        log::info!("Configuration reloaded");
                    }
                    Err(e) => log::error!("Failed to reload config: {}", e),
                };
            }
        }
    }
}

impl AppModel {
    fn touch(&mut self, event: TouchEvent) {
        let outcome = self.arc.borrow_mut().handle_touch(event);
        if outcome.redraw {
            self.drawing_area.queue_draw();
        }
        self.sync_value();
    }

    fn sync_value(&mut self) {
        self.value = self.arc.borrow().progress();
    }
}
