use crate::{board::BoardView, common::BoardError, coordinate::Coordinate};

/// Where a side's next shot comes from.
///
/// Implementations only pick coordinates; validation happens on the
/// opponent's board and rejected shots are reported back through
/// [`TargetSource::handle_rejected`] before the source is asked again.
pub trait TargetSource {
    /// Choose the next target on the opponent board seen through `view`.
    /// `None` means the source has no more input and the game should stop.
    fn next_target(&mut self, view: &BoardView<'_>) -> Option<Coordinate>;

    /// Inform the source that `target` was refused (off the grid or already
    /// targeted). The side keeps its turn.
    fn handle_rejected(&mut self, _target: Coordinate, _err: &BoardError) {}
}
