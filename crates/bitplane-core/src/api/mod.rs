//! Builder style API working on files, see [`hide::prepare`] and [`unveil::prepare`].

pub mod hide;
pub mod unveil;
