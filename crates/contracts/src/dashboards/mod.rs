pub mod d400_analytics;
