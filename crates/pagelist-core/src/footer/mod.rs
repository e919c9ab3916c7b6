//! Pagination footer state machine.
//!
//! The footer is a single synthetic slot appended after the last row while
//! pagination is enabled. It shows one of three consumer-supplied visuals:
//!
//! | State   | Entered by                                   | Left by                    |
//! |---------|----------------------------------------------|----------------------------|
//! | Absent  | pagination disabled                          | pagination enabled         |
//! | Loading | enabling, a retry tap, a page being appended | failure, end of data       |
//! | Failed  | a reported load failure                      | a tap on the failed visual |
//! | End     | end of data                                  | an explicit re-arm         |
//!
//! The controller also owns the one-request-at-a-time guard: a load-more
//! request can be claimed once per entry into `Loading`, and only while the
//! loading visual is actually attached.

mod slot;

pub use slot::{FooterContent, FooterSlot};

/// Current footer state. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FooterState {
    Absent,
    Loading,
    Failed,
    End,
}

/// Owns the footer visuals and drives transitions between them.
///
/// `V` is whatever handle the host uses for a rendered view.
#[derive(Debug)]
pub struct FooterController<V> {
    state: FooterState,
    /// Set once a load-more request has been issued for the current
    /// `Loading` entry; cleared when `Loading` is re-entered.
    request_outstanding: bool,
    loading_view: Option<V>,
    failed_view: Option<V>,
    end_view: Option<V>,
    slot: FooterSlot,
    warned_missing_loading_view: bool,
}

impl<V> FooterController<V> {
    /// Creates a controller in `Loading` when `enabled`, otherwise `Absent`.
    pub fn new(enabled: bool) -> Self {
        Self {
            state: if enabled {
                FooterState::Loading
            } else {
                FooterState::Absent
            },
            request_outstanding: false,
            loading_view: None,
            failed_view: None,
            end_view: None,
            slot: FooterSlot::new(),
            warned_missing_loading_view: false,
        }
    }

    #[inline]
    pub fn state(&self) -> FooterState {
        self.state
    }

    /// Whether the footer occupies a slot.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.state != FooterState::Absent
    }

    #[inline]
    pub fn request_outstanding(&self) -> bool {
        self.request_outstanding
    }

    /// Generation of the footer container; changes whenever content is swapped.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.slot.generation()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────

    /// Supplies the loading visual. `None` leaves everything untouched.
    ///
    /// Without a loading visual the near-end trigger never fires.
    pub fn set_loading_view(&mut self, view: Option<V>) -> bool {
        let Some(view) = view else {
            return false;
        };
        self.loading_view = Some(view);
        self.view_replaced(FooterContent::Loading);
        true
    }

    /// Supplies the failed visual. `None` leaves everything untouched.
    ///
    /// Without a failed visual, failures leave an empty footer and there is
    /// nothing for the user to tap to retry.
    pub fn set_failed_view(&mut self, view: Option<V>) -> bool {
        let Some(view) = view else {
            return false;
        };
        self.failed_view = Some(view);
        self.view_replaced(FooterContent::Failed);
        true
    }

    /// Supplies the end-of-data visual. `None` leaves everything untouched.
    pub fn set_end_view(&mut self, view: Option<V>) -> bool {
        let Some(view) = view else {
            return false;
        };
        self.end_view = Some(view);
        self.view_replaced(FooterContent::End);
        true
    }

    /// The configured view for `content`.
    pub fn view(&self, content: FooterContent) -> Option<&V> {
        match content {
            FooterContent::Loading => self.loading_view.as_ref(),
            FooterContent::Failed => self.failed_view.as_ref(),
            FooterContent::End => self.end_view.as_ref(),
        }
    }

    /// The content attached to the footer container right now.
    #[inline]
    pub fn current_content(&self) -> Option<FooterContent> {
        self.slot.attached()
    }

    /// The view the host should render in the footer slot right now.
    pub fn current_view(&self) -> Option<&V> {
        self.current_content().and_then(|content| self.view(content))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Guard
    // ─────────────────────────────────────────────────────────────────────

    /// Returns true while the footer is `Loading` and the loading visual is
    /// the attached content.
    pub fn currently_showing_loading_indicator(&self) -> bool {
        self.state == FooterState::Loading
            && self.slot.attached() == Some(FooterContent::Loading)
    }

    /// Claims the load-more request for the current `Loading` entry.
    ///
    /// Succeeds at most once until `Loading` is re-entered, and never while
    /// the loading visual is not shown.
    pub fn claim_load_request(&mut self) -> bool {
        if !self.currently_showing_loading_indicator() {
            if self.state == FooterState::Loading
                && self.loading_view.is_none()
                && !self.warned_missing_loading_view
            {
                self.warned_missing_loading_view = true;
                log::warn!(
                    "Pagination footer has no loading view; load-more will never be requested. \
                     Call set_loading_view before the list reaches its end."
                );
            }
            return false;
        }
        if self.request_outstanding {
            return false;
        }
        self.request_outstanding = true;
        true
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// `Absent → Loading`.
    pub fn enable(&mut self) -> bool {
        if self.state != FooterState::Absent {
            return false;
        }
        self.enter(FooterState::Loading);
        true
    }

    /// `* → Absent`.
    pub fn disable(&mut self) -> bool {
        if self.state == FooterState::Absent {
            return false;
        }
        self.enter(FooterState::Absent);
        true
    }

    /// A page arrived while loading; re-arms the request guard.
    pub fn page_loaded(&mut self) -> bool {
        if self.state != FooterState::Loading {
            log::debug!("Footer ignoring page_loaded in {:?}", self.state);
            return false;
        }
        self.enter(FooterState::Loading);
        true
    }

    /// `Loading → Failed`.
    pub fn load_failed(&mut self) -> bool {
        if self.state != FooterState::Loading {
            log::debug!("Footer ignoring load_failed in {:?}", self.state);
            return false;
        }
        if self.failed_view.is_none() {
            log::warn!("Load-more failed but no failed view is configured; the failure is not visible");
        }
        self.enter(FooterState::Failed);
        true
    }

    /// `Loading | Failed → End`.
    pub fn end_of_data(&mut self) -> bool {
        match self.state {
            FooterState::Loading | FooterState::Failed => {
                self.enter(FooterState::End);
                true
            }
            FooterState::Absent | FooterState::End => {
                log::debug!("Footer ignoring end_of_data in {:?}", self.state);
                false
            }
        }
    }

    /// A tap on the footer. Retries when the failed visual is attached.
    ///
    /// On success the footer is `Loading` again and the retry request is
    /// already claimed, so the caller must issue exactly one load-more.
    pub fn tap(&mut self) -> bool {
        if self.state != FooterState::Failed
            || self.slot.attached() != Some(FooterContent::Failed)
        {
            return false;
        }
        self.enter(FooterState::Loading);
        self.request_outstanding = true;
        true
    }

    /// `End → Loading`, for consumers that know more data became available.
    pub fn rearm(&mut self) -> bool {
        if self.state != FooterState::End {
            log::debug!("Footer ignoring rearm in {:?}", self.state);
            return false;
        }
        self.enter(FooterState::Loading);
        true
    }

    fn enter(&mut self, state: FooterState) {
        if self.state != state {
            log::debug!("Footer {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        self.request_outstanding = false;
        self.sync_content();
    }

    fn view_replaced(&mut self, content: FooterContent) {
        if self.slot.attached() == Some(content) {
            self.slot.refresh();
        } else {
            self.sync_content();
        }
    }

    fn sync_content(&mut self) {
        let next = FooterContent::for_state(self.state).filter(|c| self.view(*c).is_some());
        self.slot.replace(next);
    }
}
