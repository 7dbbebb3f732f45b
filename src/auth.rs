//! Auth-domain scope models and normalized token credentials.

pub mod scope;
pub mod token;

pub use scope::*;
pub use token::*;
