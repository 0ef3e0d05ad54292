pub mod roll20;
