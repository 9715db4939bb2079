mod refresh;

pub use refresh::refresh_task;
