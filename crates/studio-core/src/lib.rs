//! Client-side logic shared by the web frontend: the procedural backdrop
//! and the contact form state machine.

pub mod form;
pub mod motion;
pub mod scene;
pub mod shape;

pub use form::{
    interpret_response, submit, ContactForm, ContactTransport, FormCell, FormField, FormStatus,
    SubmitFailure,
};
pub use motion::{pointer_rotation, AnimationClock, PointerTracker, ShapeState, Viewport};
pub use scene::{CameraConfig, SceneComposer, ShapeInstance, BACKDROP_CAMERA};
pub use shape::{Axis, Rgb, ShapeDescriptor, ShapeKind, BACKDROP_SHAPES};
