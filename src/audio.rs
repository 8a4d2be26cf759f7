use crate::constants::{CLASS_PLAYING, MUSIC_BUTTON_ID, MUSIC_ID};
use crate::core::{ButtonFace, MusicPlayer, SiteError, ToggleAction};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const INTERACTION_EVENTS: [&str; 2] = ["click", "touchstart"];

#[derive(Clone)]
struct Player {
    state: Rc<RefCell<MusicPlayer>>,
    music: web::HtmlAudioElement,
    button: Option<web::HtmlElement>,
}

impl Player {
    fn show(&self, face: ButtonFace) {
        if let Some(b) = &self.button {
            b.set_text_content(Some(face.label));
            dom::set_class(b, CLASS_PLAYING, face.playing);
        }
    }

    /// Call `play()` and wait for the browser's verdict.
    async fn play(&self) -> Result<(), SiteError> {
        let promise = self
            .music
            .play()
            .map_err(|e| SiteError::PlaybackRejected(format!("{:?}", e)))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| SiteError::PlaybackRejected(format!("{:?}", e)))
    }

    fn toggle(&self) {
        let action = self.state.borrow_mut().toggle();
        log::debug!("[audio] toggle -> playing={}", self.state.borrow().is_playing());
        match action {
            ToggleAction::Pause => {
                _ = self.music.pause();
                self.show(ButtonFace::PAUSED);
            }
            ToggleAction::Play => {
                let player = self.clone();
                spawn_local(async move {
                    match player.play().await {
                        Ok(()) => player.show(ButtonFace::PLAYING),
                        Err(e) => log::error!("[audio] {}", e),
                    }
                });
            }
        }
    }
}

/// First click or touch anywhere starts playback, then both listeners go away.
fn arm_interaction_fallback(document: &web::Document, player: Player) {
    let armed: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
    let armed_inner = armed.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(listener) = armed_inner.borrow_mut().take() else {
            return;
        };
        for event in INTERACTION_EVENTS {
            _ = doc.remove_event_listener_with_callback(event, &listener);
        }
        let gate = player.state.borrow().gate();
        if !player.state.borrow_mut().take_interaction() {
            log::debug!("[audio] interaction ignored (gate {:?})", gate);
            return;
        }
        let player = player.clone();
        spawn_local(async move {
            match player.play().await {
                Ok(()) => {
                    let face = player.state.borrow_mut().interaction_started();
                    player.show(face);
                    log::info!("[audio] started after first interaction");
                }
                Err(e) => log::warn!("[audio] {}", e),
            }
        });
    }) as Box<dyn FnMut(web::Event)>);

    let listener: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    for event in INTERACTION_EVENTS {
        _ = document.add_event_listener_with_callback(event, &listener);
    }
    *armed.borrow_mut() = Some(listener);
    closure.forget();
}

pub fn wire_music(document: &web::Document) -> Result<(), SiteError> {
    let music = dom::require(
        document
            .get_element_by_id(MUSIC_ID)
            .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok()),
        MUSIC_ID,
    )?;
    let player = Player {
        state: Rc::new(RefCell::new(MusicPlayer::default())),
        music,
        button: dom::by_id(document, MUSIC_BUTTON_ID),
    };

    if let Some(button) = &player.button {
        let on_click = player.clone();
        dom::add_listener(button, "click", move |ev: web::MouseEvent| {
            ev.stop_propagation();
            on_click.toggle();
        });
    }

    let document = document.clone();
    spawn_local(async move {
        match player.play().await {
            Ok(()) => {
                let face = player.state.borrow_mut().autoplay_started();
                player.show(face);
                log::info!("[audio] autoplay successful");
            }
            Err(e) => {
                log::info!("[audio] autoplay blocked: {}", e);
                player.state.borrow_mut().autoplay_rejected();
                arm_interaction_fallback(&document, player);
            }
        }
    });
    Ok(())
}
