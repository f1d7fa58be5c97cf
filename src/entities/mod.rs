//! Domain entities of the content backend
//!
//! Relations are held the way an eager-loading ORM would hand them over:
//! foreign keys plus optional, possibly absent, snapshots of the related
//! entity. Specifications must treat an absent snapshot as "no match".

pub mod macros;

pub mod category;
pub mod comment;
pub mod like;
pub mod post;
pub mod references;
pub mod role;
pub mod tag;
pub mod user;

pub use category::Category;
pub use comment::Comment;
pub use like::{Like, LikeKind, LikeTarget};
pub use post::Post;
pub use references::{EntityRef, UserRef};
pub use role::{Permission, Role};
pub use tag::Tag;
pub use user::User;
