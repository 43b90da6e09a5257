//! `touch_action` entry points
//!
//! 1. browser - gesture anchored to the session viewport
//! 2. element - gesture anchored to a located element
//!
//! Both make exactly one executor call with the request untouched and return
//! its result unmodified.

pub mod browser;
pub mod element;
