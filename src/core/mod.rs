//! Interface cache, UI/worker message bus, and the worker that runs one
//! thread per user action.

pub mod bus;
pub mod state;
pub mod worker;
