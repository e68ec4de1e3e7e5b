/// Ringcube Web - browser frontend for the rotating-cube demo
///
/// Sizes a canvas to the window, appends it to the `ring-of-cube` container
/// element, and drives the render loop with `requestAnimationFrame`. The
/// page lifecycle owns the loop; there is no explicit stop condition.
use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use ringcube_core::{content, Camera, Scene, Viewport};

/// Id of the host element the canvas is appended to
pub const CONTAINER_ID: &str = "ring-of-cube";

/// Precondition failures the host page can present at setup time.
///
/// None of these are recovered from; they are surfaced to the embedding
/// page as the thrown value of the wasm start function.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no window object available")]
    NoWindow,
    #[error("no document attached to the window")]
    NoDocument,
    #[error("container element `{0}` not found in the document")]
    MissingContainer(&'static str),
    #[error("created element is not a canvas")]
    NotACanvas,
    #[error("2d canvas context unavailable")]
    NoContext,
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Entry point: display context setup, scene content, then the render loop
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;

    // Surface size is the window's inner size, read once at startup; no
    // resize handler exists.
    let width = window.inner_width()?.as_f64().unwrap_or(0.0) as u32;
    let height = window.inner_height()?.as_f64().unwrap_or(0.0) as u32;
    let viewport = Viewport::new(width, height);

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| SetupError::NotACanvas)?;
    canvas.set_width(viewport.width);
    canvas.set_height(viewport.height);

    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or(SetupError::MissingContainer(CONTAINER_ID))?;
    container.append_child(&canvas)?;

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(SetupError::NoContext)?
        .dyn_into()
        .map_err(|_| SetupError::NoContext)?;

    let camera = content::build_camera(viewport);
    let mut scene = content::build_scene();

    // Self-rescheduling frame callback: register the next frame first, then
    // step the rotation, then draw. One full iteration per display refresh.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();
    let inner = frame.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        schedule_frame(inner.borrow().as_ref().expect("render loop closure"));

        for mesh in scene.meshes_mut() {
            content::advance(mesh);
        }
        draw_scene(&context, &scene, &camera, viewport);
    }) as Box<dyn FnMut()>));

    schedule_frame(first.borrow().as_ref().expect("render loop closure"));
    Ok(())
}

/// Ask the host to run the callback on the next display refresh
fn schedule_frame(callback: &Closure<dyn FnMut()>) {
    web_sys::window()
        .expect("no window object")
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .expect("requestAnimationFrame registration failed");
}

/// One draw call: clear the surface and stroke every triangle edge
fn draw_scene(
    context: &CanvasRenderingContext2d,
    scene: &Scene,
    camera: &Camera,
    viewport: Viewport,
) {
    context.clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);

    for mesh in scene.meshes() {
        let model = mesh.model_matrix();
        context.set_stroke_style_str(&mesh.material().color().to_css());
        context.set_line_width(1.0);
        context.begin_path();

        for triangle in &mesh.geometry().triangles {
            let mut screen = [(0.0_f64, 0.0_f64); 3];
            let mut visible = true;
            for (i, vertex) in triangle.vertices.iter().enumerate() {
                match camera.project_to_screen(&vertex.position, &model, viewport) {
                    Some((x, y, _)) => screen[i] = (x as f64, y as f64),
                    None => {
                        visible = false;
                        break;
                    }
                }
            }
            if !visible {
                continue;
            }

            context.move_to(screen[0].0, screen[0].1);
            context.line_to(screen[1].0, screen[1].1);
            context.line_to(screen[2].0, screen[2].1);
            context.line_to(screen[0].0, screen[0].1);
        }
        context.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_messages_name_the_failure() {
        assert_eq!(
            SetupError::MissingContainer(CONTAINER_ID).to_string(),
            "container element `ring-of-cube` not found in the document"
        );
        assert_eq!(
            SetupError::NoContext.to_string(),
            "2d canvas context unavailable"
        );
    }
}
