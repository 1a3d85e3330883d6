mod errors;
mod sequence;
mod user;

pub use errors::UserError;
pub use sequence::AccountSequence;
pub use user::User;
