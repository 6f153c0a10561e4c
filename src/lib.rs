//! niccmd — terminal dashboard client for a network-interface monitoring
//! backend.
//!
//! The backend exposes three REST-style endpoints (`/api/nics`,
//! `/api/ping`, `/api/discover`); this crate is the presentation side:
//! it fetches and renders the interface list, submits ping and subnet
//! discovery requests, and surfaces errors. The backend itself (ping and
//! scan execution, interface enumeration) is an external collaborator.
//!
//! Modules are grouped by concern: `protocol` holds the wire types,
//! validation, and the blocking HTTP client; `core` holds the interface
//! cache, the UI/worker bus, and the action worker; `tui` holds the view
//! state and rendering.

pub mod core;
pub mod protocol;
#[doc(hidden)]
pub mod tui;
