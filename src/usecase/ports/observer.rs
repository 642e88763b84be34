use crate::domain::entities::grid::GridChange;

/// Change-notification seam between the table model and whatever renders
/// it. The model calls `grid_changed` after each accepted mutation; a view
/// registers itself and refreshes the affected cells or rows.
pub trait ModelObserver: Send + Sync {
    fn grid_changed(&self, change: &GridChange);
}
