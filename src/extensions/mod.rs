mod listeners;
mod scheduler;

pub use listeners::{NavigationContext, NavigationEvent, NavigationListener, SwipeCallbacks};
pub use scheduler::{DeferredRecenterQueue, RenderScheduler};
