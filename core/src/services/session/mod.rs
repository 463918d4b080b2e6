//! Session lifecycle: creation on login, checks on renewal, blocking on
//! logout or administrative revocation.

mod service;


pub use service::SessionService;
