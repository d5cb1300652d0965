//! Lobby entry controller.
//!
//! Drives the entry form: validates the name and room code, remembers the
//! name for the session, asks the server for a new room and sends the
//! browser to the lobby.

use std::cell::Cell;

use tracing::{debug, error, info, warn};

use crate::config::EntryConfig;
use crate::context::EntryContext;
use crate::error::EntryError;
use crate::link::{LobbyLink, NavigationTarget};
use crate::name::{DisplayName, RoomCode};
use crate::view::EntryView;

/// Controller for one entry page.
///
/// All methods take `&self`; state lives in `Cell`s so UI callbacks can share
/// the controller behind an `Rc` and never hold a borrow across the create
/// request's await point.
pub struct LobbyEntryController<C> {
    ctx: C,
    config: EntryConfig,
    view: Cell<EntryView>,
    creating: Cell<bool>,
}

/// Clears the in-flight flag even if the create future is dropped.
struct CreatingGuard<'a>(&'a Cell<bool>);

impl<'a> CreatingGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self(flag))
    }
}

impl Drop for CreatingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<C: EntryContext> LobbyEntryController<C> {
    pub fn new(ctx: C, config: EntryConfig) -> Self {
        Self {
            ctx,
            config,
            view: Cell::new(EntryView::default()),
            creating: Cell::new(false),
        }
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn config(&self) -> &EntryConfig {
        &self.config
    }

    pub fn view(&self) -> EntryView {
        self.view.get()
    }

    /// Whether a create request is waiting on the server.
    pub fn is_creating(&self) -> bool {
        self.creating.get()
    }

    /// Name saved by an earlier create in this tab, if any.
    pub fn remembered_name(&self) -> Option<DisplayName> {
        let stored = self.ctx.get(&self.config.username_key)?;
        DisplayName::parse(&stored).ok()
    }

    /// Switch from the create/join buttons to the room-code form.
    ///
    /// Requires a name. Calling it again once the form is shown is a no-op.
    pub fn reveal_join_input(&self, raw_name: &str) -> Result<EntryView, EntryError> {
        if let Err(err) = DisplayName::parse(raw_name) {
            return Err(self.reject(err));
        }

        let next = self.view.get().reveal_join();
        if next != self.view.get() {
            debug!("Showing join-by-code form");
        }
        self.view.set(next);
        Ok(next)
    }

    /// Create a room on the server and navigate to its lobby.
    ///
    /// On failure nothing is navigated and the controller is left as it was
    /// before the call, so the user can simply try again.
    pub async fn create_game(&self, raw_name: &str) -> Result<NavigationTarget, EntryError> {
        let Some(_guard) = CreatingGuard::acquire(&self.creating) else {
            warn!("Ignoring create request while another is in flight");
            return Err(EntryError::CreateInFlight);
        };

        let name = match DisplayName::parse(raw_name) {
            Ok(name) => name,
            Err(err) => return Err(self.reject(err)),
        };
        self.remember_name(&name);

        info!("Creating game via {}", self.config.create_endpoint);
        match self.ctx.create_room(&self.config.create_endpoint).await {
            Ok(room) => {
                info!(
                    "Created room {} ({})",
                    room.room_code.as_deref().unwrap_or("?"),
                    room.link.as_str()
                );
                let target = NavigationTarget::new(room.link, name);
                self.go(&target);
                Ok(target)
            }
            Err(err) => {
                error!("Failed to create game: {err}");
                self.ctx.notify(&err);
                Err(err)
            }
        }
    }

    /// Navigate straight to the lobby of the room the user typed in.
    ///
    /// The server is not consulted; an unknown code is the lobby page's
    /// problem.
    pub fn join_game(&self, raw_code: &str, raw_name: &str) -> Result<NavigationTarget, EntryError> {
        let code = RoomCode::parse(raw_code).map_err(|err| self.reject(err))?;
        let name = DisplayName::parse(raw_name).map_err(|err| self.reject(err))?;

        let target = NavigationTarget::new(LobbyLink::for_room(&self.config.lobby_path, &code), name);
        self.go(&target);
        Ok(target)
    }

    fn remember_name(&self, name: &DisplayName) {
        if let Err(err) = self.ctx.set(&self.config.username_key, name.as_str()) {
            warn!("Could not store display name: {err}");
        }
    }

    fn go(&self, target: &NavigationTarget) {
        info!("Navigating to {}", target.path());
        self.ctx.navigate(target);
    }

    /// Report a validation failure to the user and hand the error back.
    fn reject(&self, err: EntryError) -> EntryError {
        warn!("Entry form rejected: {err}");
        self.ctx.notify(&err);
        if err == EntryError::EmptyName {
            self.ctx.focus_name_field();
        }
        err
    }
}
