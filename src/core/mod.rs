pub mod anchor;
pub mod constants;
pub mod contact;
pub mod notice;
pub mod particles;
pub mod reveal;
pub mod schedule;
pub mod scroll;
pub mod tilt;
pub mod trail;

pub use contact::{ContactFields, Outcome};
pub use notice::{Notice, NoticeId, NoticeKind, NoticeSlot};
pub use reveal::{CardGroup, CardReveal, RevealBoard, SectionLayout, SectionTags};
pub use schedule::{Deferred, Timeline};
pub use scroll::{Backdrop, ScrollFrame};
pub use tilt::{CardRect, Tilt};
pub use trail::{MarkerId, Trail};
