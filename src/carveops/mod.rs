pub mod convergence;
pub mod editor;
pub mod energy;
pub mod object_removal;
pub mod resize;
pub mod seam;
