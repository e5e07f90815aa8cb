//! Target-independent building blocks of the GoBarber web client.
//!
//! Everything here compiles and tests natively: the API models, the session
//! store and its storage seam, the route guard, and the dashboard view-model
//! with its memo caches and calendar grid. The Yew front end wires these into
//! pages.

pub mod dashboard;
pub mod models;
pub mod routing;
pub mod session;
