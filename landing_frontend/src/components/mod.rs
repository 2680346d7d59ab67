mod intro;
mod member_counter;

pub use intro::Intro;
pub use member_counter::MemberCount;
