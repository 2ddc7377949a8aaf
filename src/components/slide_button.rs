//! Slide-to-confirm control.
//!
//! The handle is dragged across the track; crossing the completion
//! threshold fires the caller's async action exactly once per drag
//! session. Mouse tracking uses document-level listeners while a drag is
//! active so the pointer can leave the control's bounds; they are removed
//! on drag end and on unmount. The gesture math itself lives in
//! [`crate::state::slide`].

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::api::ApiError;
use crate::state::{SlideOutcome, SlideSession};

pub type CompleteFuture = Pin<Box<dyn Future<Output = Result<(), ApiError>>>>;

/// Caller-supplied confirmation action. The control only looks at the
/// `Err` case, which snaps the handle back so the user can retry; any
/// message display stays with the caller.
#[derive(Clone)]
pub struct CompleteAction(Rc<dyn Fn() -> CompleteFuture>);

impl CompleteAction {
    pub fn new(action: impl Fn() -> CompleteFuture + 'static) -> Self {
        Self(Rc::new(action))
    }

    fn call(&self) -> CompleteFuture {
        (self.0)()
    }
}

impl PartialEq for CompleteAction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SlideButtonProps {
    pub on_complete: CompleteAction,
    #[prop_or(false)]
    pub is_loading: bool,
    #[prop_or(AttrValue::Static("Confirming..."))]
    pub loading_text: AttrValue,
    #[prop_or(AttrValue::Static("Slide to confirm"))]
    pub idle_text: AttrValue,
    #[prop_or(AttrValue::Static("/icons/chevron_right.svg"))]
    pub handle_icon: AttrValue,
}

#[function_component(SlideButton)]
pub fn slide_button(props: &SlideButtonProps) -> Html {
    let session = use_mut_ref(SlideSession::default);
    // Mirror of the session's offset so moves re-render the handle.
    let offset = use_state(|| 0.0f64);
    let dragging = use_state(|| false);
    let container_ref = use_node_ref();

    let handle_move: Rc<dyn Fn(f64)> = {
        let session = session.clone();
        let offset = offset.clone();
        let dragging = dragging.clone();
        let container_ref = container_ref.clone();
        let action = props.on_complete.clone();
        Rc::new(move |client_x: f64| {
            let Some(el) = container_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let width = el.offset_width() as f64;
            let outcome = session.borrow_mut().drag_to(client_x, rect.left(), width);
            offset.set(session.borrow().offset);
            if outcome == SlideOutcome::Completed {
                let session = session.clone();
                let offset = offset.clone();
                let dragging = dragging.clone();
                let action = action.clone();
                spawn_local(async move {
                    if action.call().await.is_err() {
                        // The failure ends the session even if the pointer
                        // is still held, so the mirrored drag flag must
                        // drop too or the document listeners stay attached.
                        session.borrow_mut().fail();
                        offset.set(0.0);
                        dragging.set(false);
                    }
                });
            }
        })
    };

    let handle_release: Rc<dyn Fn()> = {
        let session = session.clone();
        let offset = offset.clone();
        let dragging = dragging.clone();
        let container_ref = container_ref.clone();
        Rc::new(move || {
            if !session.borrow().dragging {
                return;
            }
            let width = container_ref
                .cast::<HtmlElement>()
                .map(|el| el.offset_width() as f64)
                .unwrap_or(0.0);
            session.borrow_mut().release(width);
            offset.set(session.borrow().offset);
            dragging.set(false);
        })
    };

    // Document-level mouse tracking, attached only for the lifetime of a
    // drag and detached on drag end or unmount.
    {
        let handle_move = handle_move.clone();
        let handle_release = handle_release.clone();
        use_effect_with(*dragging, move |active| {
            let mut listeners: Option<(
                Closure<dyn FnMut(web_sys::MouseEvent)>,
                Closure<dyn FnMut(web_sys::MouseEvent)>,
            )> = None;
            if *active {
                if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                    let mousemove = {
                        let handle_move = handle_move.clone();
                        Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                            handle_move(e.client_x() as f64);
                        }) as Box<dyn FnMut(_)>)
                    };
                    let mouseup = {
                        let handle_release = handle_release.clone();
                        Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                            handle_release();
                        }) as Box<dyn FnMut(_)>)
                    };
                    let _ = doc.add_event_listener_with_callback(
                        "mousemove",
                        mousemove.as_ref().unchecked_ref(),
                    );
                    let _ = doc.add_event_listener_with_callback(
                        "mouseup",
                        mouseup.as_ref().unchecked_ref(),
                    );
                    listeners = Some((mousemove, mouseup));
                }
            }
            move || {
                if let Some((mousemove, mouseup)) = listeners {
                    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                        let _ = doc.remove_event_listener_with_callback(
                            "mousemove",
                            mousemove.as_ref().unchecked_ref(),
                        );
                        let _ = doc.remove_event_listener_with_callback(
                            "mouseup",
                            mouseup.as_ref().unchecked_ref(),
                        );
                    }
                }
            }
        });
    }

    let on_start = {
        let session = session.clone();
        let dragging = dragging.clone();
        let is_loading = props.is_loading;
        Rc::new(move || {
            if session.borrow_mut().begin(is_loading) {
                dragging.set(true);
            }
        })
    };
    let onmousedown = {
        let on_start = on_start.clone();
        Callback::from(move |_: MouseEvent| on_start())
    };
    let ontouchstart = {
        let on_start = on_start.clone();
        Callback::from(move |_: TouchEvent| on_start())
    };
    let ontouchmove = {
        let handle_move = handle_move.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                handle_move(touch.client_x() as f64);
            }
        })
    };
    let ontouchend = {
        let handle_release = handle_release.clone();
        Callback::from(move |_: TouchEvent| handle_release())
    };
    let ontouchcancel = {
        let handle_release = handle_release.clone();
        Callback::from(move |_: TouchEvent| handle_release())
    };

    let handle_style = format!(
        "position:absolute; left:0; top:0; height:100%; width:56px; border-radius:9999px; \
         display:flex; align-items:center; justify-content:center; background:{}; cursor:{}; \
         transform:translateX({}px);{}",
        if *dragging { "#fbbf24" } else { "#fcd34d" },
        if props.is_loading { "not-allowed" } else { "pointer" },
        *offset,
        if props.is_loading { " opacity:0.5;" } else { "" },
    );

    html! {
        <div
            ref={container_ref}
            style="position:relative; height:56px; background:#f3f4f6; border-radius:9999px; overflow:hidden;"
        >
            <div
                style={handle_style}
                {onmousedown}
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
                {ontouchcancel}
            >
                <img src={props.handle_icon.clone()} alt="Slide" width="24" height="24" />
            </div>
            <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; pointer-events:none;">
                <span style="color:#6b7280;">
                    { if props.is_loading { props.loading_text.clone() } else { props.idle_text.clone() } }
                </span>
            </div>
        </div>
    }
}
