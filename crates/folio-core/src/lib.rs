//! Folio core - scroll-spy navigation for a single-page portfolio
//!
//! Platform-free behavior for the portfolio page. The DOM lives behind
//! [`PageHost`], [`ScrollRoot`] and [`NavView`]; `folio-web` implements them
//! with web-sys, tests implement them in memory.
//!
//! # Architecture
//!
//! ```text
//! scroll ──► ScrollSync::on_scroll ──► FrameGate ──► request_frame ──┐
//! resize ──► ScrollSync::on_resize ──► bind_scroll_root ─────────────┤
//!                                                                    ▼
//!                         ScrollRoot::sections ──► active_index ──► NavBar
//! click  ──► ScrollSync::handle_click ──► scroll_to_section ──► ScrollRoot::scroll_to
//!                                                          └──► replace_fragment
//! ```

pub mod click;
pub mod config;
pub mod controller;
pub mod decor;
pub mod error;
pub mod host;
pub mod nav;
pub mod notify;
pub mod root;
pub mod section;
pub mod text;

pub use click::{ClickOutcome, ClickTarget};
pub use config::{CtaBinding, FolioConfig};
pub use controller::ScrollSync;
pub use decor::HoverLift;
pub use error::{ConfigError, FolioError, Result};
pub use host::{FrameGate, PageHost, Subscription};
pub use nav::{NavBar, NavEntry, NavView};
pub use notify::{NotificationCenter, NotificationId, NotificationKind};
pub use root::{select_root, Extent, RootKind, ScrollBehavior, ScrollRoot};
pub use section::{active_index, Section, SectionId};
pub use text::{RoleRotator, Typewriter};
