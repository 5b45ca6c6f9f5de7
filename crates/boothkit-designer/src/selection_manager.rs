use crate::model::ElementId;

/// Tracks the selected element set and its primary member.
///
/// `SelectionManager` is responsible for:
/// - Keeping the selected IDs in selection order without duplicates
/// - Designating one "primary" element used for property display and as the
///   anchor for shift-extension
/// - Re-resolving the selection after the document is replaced
///
/// # Selection Model
///
/// - **Primary Selection**: if the set is non-empty the primary is one of its
///   members; an empty set has no primary
/// - **Toggle**: extending the selection toggles membership of one element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: Vec<ElementId>,
    primary: Option<ElementId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use boothkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the primary selected element.
    pub fn selected_id(&self) -> Option<ElementId> {
        self.primary
    }

    /// All selected IDs in selection order.
    pub fn selected_ids(&self) -> &[ElementId] {
        &self.selected
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clears the set and the primary.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.primary = None;
    }

    /// Replaces the selection with a single element.
    pub fn select_only(&mut self, id: ElementId) {
        self.selected.clear();
        self.selected.push(id);
        self.primary = Some(id);
    }

    /// Toggles membership of `id`.
    ///
    /// An added element becomes primary. Removing the primary re-elects the
    /// first remaining member, or clears the primary if none remain.
    pub fn toggle(&mut self, id: ElementId) {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
            if self.primary == Some(id) {
                self.primary = self.selected.first().copied();
            }
        } else {
            self.selected.push(id);
            self.primary = Some(id);
        }
    }

    /// Replaces the selection with `ids`; the first becomes primary.
    pub fn set_many<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ElementId>,
    {
        self.selected.clear();
        for id in ids {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
        self.primary = self.selected.first().copied();
    }

    /// Keeps only the IDs for which `keep` holds.
    ///
    /// The primary survives if it is kept; otherwise the first remaining
    /// member takes over. Returns true if anything was dropped.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(ElementId) -> bool,
    {
        let before = self.selected.len();
        self.selected.retain(|id| keep(*id));
        if !self.primary.is_some_and(|p| self.selected.contains(&p)) {
            self.primary = self.selected.first().copied();
        }
        self.selected.len() != before
    }
}
