use leptos::html::Canvas;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use studio_core::{AnimationClock, PointerTracker, SceneComposer, Viewport, BACKDROP_SHAPES};
use studio_geom::{LineBatch, ShapeLibrary};
use studio_render::Renderer;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;

use crate::wasm_app::log;

/// Everything one animation frame touches.
struct Backdrop {
    scene: SceneComposer,
    library: ShapeLibrary,
    clock: AnimationClock,
    lines: LineBatch,
    renderer: Renderer,
}

impl Backdrop {
    fn frame(&mut self, now_ms: f64, pointer: &PointerTracker, viewport: Viewport) {
        let dt = self.clock.tick(now_ms);
        self.scene.advance(dt, pointer, viewport);
        self.library.build_frame(&mut self.lines, self.scene.instances());
        self.renderer.set_lines(&self.lines);
        self.renderer.render();
    }
}

#[component]
pub fn FloatingShapes() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let pointer = Rc::new(RefCell::new(PointerTracker::default()));

    track_pointer(pointer.clone());
    schedule_backdrop_init(canvas_ref, pointer);

    view! {
        <div class="backdrop" aria-hidden="true">
            <canvas id="backdrop-canvas" node_ref=canvas_ref></canvas>
        </div>
    }
}

fn track_pointer(pointer: Rc<RefCell<PointerTracker>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let onmove = Closure::wrap(Box::new(move |event: MouseEvent| {
        pointer
            .borrow_mut()
            .move_to(event.client_x() as f32, event.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("mousemove", onmove.as_ref().unchecked_ref());
    onmove.forget();
}

fn schedule_backdrop_init(canvas_ref: NodeRef<Canvas>, pointer: Rc<RefCell<PointerTracker>>) {
    request_animation_frame(move || {
        if let Some(canvas) = canvas_ref.get() {
            spawn_local(async move {
                let library = match ShapeLibrary::new() {
                    Ok(library) => library,
                    Err(err) => {
                        log(&format!("backdrop geometry invalid: {err}"));
                        return;
                    }
                };
                match Renderer::new(canvas.clone()).await {
                    Ok(mut renderer) => {
                        renderer.attach_resize_handler(&canvas);
                        let backdrop = Backdrop {
                            scene: SceneComposer::new(&BACKDROP_SHAPES, &mut rand::thread_rng()),
                            library,
                            clock: AnimationClock::new(),
                            lines: LineBatch::default(),
                            renderer,
                        };
                        run_frame_loop(backdrop, pointer);
                    }
                    Err(err) => {
                        log(&format!("renderer init failed: {err}"));
                    }
                }
            });
        } else {
            // Canvas not mounted yet, try again on the next frame.
            schedule_backdrop_init(canvas_ref, pointer);
        }
    });
}

fn run_frame_loop(backdrop: Backdrop, pointer: Rc<RefCell<PointerTracker>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let performance = window.performance();
    let mut backdrop = backdrop;

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let now_ms = performance.as_ref().map_or(0.0, |p| p.now());
        backdrop.frame(now_ms, &pointer.borrow(), window_viewport(&window));

        if let Some(callback) = next.borrow().as_ref() {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = tick.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

fn window_viewport(window: &web_sys::Window) -> Viewport {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
}
