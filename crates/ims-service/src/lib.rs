//! # ims-service
//!
//! Client-side use cases for the inventory client. Services share one
//! local storage, one session and one notice center, all wired together
//! by [`AppContext`].
//!
//! Services follow constructor injection; dependencies are provided at
//! construction time and shared through `Arc` or cheap clones.

pub mod collection;
pub mod context;
pub mod login;
pub mod navigation;
pub mod notice;
pub mod preferences;

pub use collection::{
    CollectionController, CollectionSettings, OrderedCollection, ReorderHandle, ReorderOutcome,
    ViewWindow,
};
pub use context::{AppContext, CategoryController, ProductController};
pub use login::{LoginOutcome, LoginService};
pub use navigation::{Navigation, Navigator};
pub use notice::NoticeCenter;
pub use preferences::{LayoutPrefs, NavPosition, ThemeMode, UiPreferences, ViewMode, VnavStyle};
