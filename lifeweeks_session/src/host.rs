// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window-level pointer-up listener tied to the lifetime of a mounted session.
//!
//! A drag that ends outside the canvas never delivers its pointer-up to the
//! canvas itself, so the session listens at the window level while it is
//! on screen. [`LifeGridSession::mount`] registers that listener with a
//! [`PointerUpHost`] and returns a [`MountedSession`] guard. Dropping the
//! guard is the only way to unmount, and it always deregisters.
//!
//! ```
//! use chrono::NaiveDate;
//! use lifeweeks_session::{LifeGridSession, PointerUpHost, SessionConfig};
//!
//! #[derive(Default)]
//! struct Window {
//!     listeners: Vec<u32>,
//!     next: u32,
//! }
//!
//! impl PointerUpHost for Window {
//!     type Listener = u32;
//!     fn add_pointer_up_listener(&mut self) -> u32 {
//!         self.next += 1;
//!         self.listeners.push(self.next);
//!         self.next
//!     }
//!     fn remove_pointer_up_listener(&mut self, listener: u32) {
//!         self.listeners.retain(|&l| l != listener);
//!     }
//! }
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut session = LifeGridSession::new(SessionConfig::default(), today);
//! let mut window = Window::default();
//! {
//!     let mut mounted = session.mount(&mut window);
//!     mounted.on_pointer_up();
//! }
//! assert!(window.listeners.is_empty());
//! ```

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::session::LifeGridSession;

/// Something that can deliver window-level pointer-up notifications.
pub trait PointerUpHost {
    /// Handle identifying a registration.
    type Listener: fmt::Debug;

    /// Starts delivering pointer-up notifications and returns the handle.
    fn add_pointer_up_listener(&mut self) -> Self::Listener;

    /// Stops the notifications registered under `listener`.
    fn remove_pointer_up_listener(&mut self, listener: Self::Listener);
}

/// A session attached to a host for as long as this guard lives.
///
/// Dereferences to the [`LifeGridSession`], so input keeps flowing through
/// the guard while it is mounted.
pub struct MountedSession<'a, H: PointerUpHost> {
    session: &'a mut LifeGridSession,
    host: &'a mut H,
    listener: Option<H::Listener>,
}

impl LifeGridSession {
    /// Registers a pointer-up listener with `host` and returns the guard
    /// that removes it again.
    pub fn mount<'a, H: PointerUpHost>(&'a mut self, host: &'a mut H) -> MountedSession<'a, H> {
        let listener = host.add_pointer_up_listener();
        #[cfg(feature = "tracing")]
        tracing::debug!(?listener, "pointer-up listener registered");
        MountedSession {
            session: self,
            host,
            listener: Some(listener),
        }
    }
}

impl<H: PointerUpHost> MountedSession<'_, H> {
    /// Delivers a window-level pointer-up. Returns `true` if a drag ended.
    pub fn on_pointer_up(&mut self) -> bool {
        self.session.release_pointer()
    }

    /// The handle the host issued for this mount.
    #[must_use]
    pub fn listener(&self) -> Option<&H::Listener> {
        self.listener.as_ref()
    }
}

impl<H: PointerUpHost> Deref for MountedSession<'_, H> {
    type Target = LifeGridSession;

    fn deref(&self) -> &LifeGridSession {
        self.session
    }
}

impl<H: PointerUpHost> DerefMut for MountedSession<'_, H> {
    fn deref_mut(&mut self) -> &mut LifeGridSession {
        self.session
    }
}

impl<H: PointerUpHost> Drop for MountedSession<'_, H> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            #[cfg(feature = "tracing")]
            tracing::debug!(?listener, "pointer-up listener removed");
            self.host.remove_pointer_up_listener(listener);
        }
    }
}

impl<H: PointerUpHost> fmt::Debug for MountedSession<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedSession")
            .field("session", &self.session)
            .field("listener", &self.listener)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use chrono::NaiveDate;
    use kurbo::Point;

    use super::*;
    use crate::input::InputEvent;
    use crate::session::SessionConfig;

    #[derive(Debug, Default)]
    struct Host {
        active: Vec<usize>,
        added: usize,
        removed: usize,
    }

    impl PointerUpHost for Host {
        type Listener = usize;

        fn add_pointer_up_listener(&mut self) -> usize {
            self.added += 1;
            self.active.push(self.added);
            self.added
        }

        fn remove_pointer_up_listener(&mut self, listener: usize) {
            self.removed += 1;
            self.active.retain(|&l| l != listener);
        }
    }

    fn session() -> LifeGridSession {
        LifeGridSession::new(
            SessionConfig::default(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn mount_registers_and_drop_deregisters() {
        let mut s = session();
        let mut host = Host::default();
        {
            let mounted = s.mount(&mut host);
            assert_eq!(mounted.listener(), Some(&1));
        }
        assert_eq!((host.added, host.removed), (1, 1));
        assert!(host.active.is_empty());

        // Remounting gets a fresh registration.
        drop(s.mount(&mut host));
        assert_eq!((host.added, host.removed), (2, 2));
    }

    #[test]
    fn pointer_up_outside_canvas_ends_drag() {
        let mut s = session();
        let mut host = Host::default();
        let mut mounted = s.mount(&mut host);
        mounted.handle(&InputEvent::PointerDown {
            client: Point::new(10.0, 10.0),
        });
        assert!(mounted.controller().mode().is_dragging());
        assert!(mounted.on_pointer_up());
        assert!(!mounted.controller().mode().is_dragging());
        assert!(!mounted.on_pointer_up());
    }
}
