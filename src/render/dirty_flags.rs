use bitflags::bitflags;

bitflags! {
    /// Flags to track which UI components need re-rendering
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DirtyFlags: u32 {
        /// Nothing needs rendering
        const NONE = 0;
        /// Watchlist body needs update (entries, selection, layout, prices)
        const WATCHLIST = 0b0000_0001;
        /// Filter chips needs update (active filter, counts)
        const FILTERS = 0b0000_0010;
        /// Search input needs update
        const SEARCH = 0b0000_0100;
        /// Removal modal needs update
        const MODAL = 0b0000_1000;
        /// Help popup needs update
        const POPUP_HELP = 0b0001_0000;
        /// Header needs update (plan, used slots)
        const HEADER = 0b0010_0000;
        /// Loading screen needs update
        const LOADING = 0b0100_0000;
        /// Status bar needs update (notices, contract violations)
        const STATUS_BAR = 0b1000_0000;
        /// All components need rendering (full redraw)
        const ALL = 0xFFFF_FFFF;
    }
}

impl DirtyFlags {
    /// Check if any component needs rendering
    #[inline]
    pub fn needs_render(self) -> bool {
        !self.is_empty()
    }

    /// Mark components for a change of visible membership (search, filter)
    #[inline]
    #[must_use]
    pub fn mark_visible_change(mut self) -> Self {
        self.insert(Self::WATCHLIST | Self::FILTERS | Self::SEARCH);
        self
    }

    /// Mark components for a change of the collection itself
    #[inline]
    #[must_use]
    pub fn mark_collection_change(mut self) -> Self {
        self.insert(Self::WATCHLIST | Self::FILTERS | Self::HEADER | Self::STATUS_BAR);
        self
    }

    /// Mark components for a removal workflow step
    #[inline]
    #[must_use]
    pub fn mark_removal_change(mut self) -> Self {
        self.insert(Self::MODAL | Self::STATUS_BAR);
        self
    }
}

/// Manages rendering state and tracks which components need updates
#[derive(Debug)]
pub struct RenderState {
    /// Dirty flags tracking which components need rendering
    dirty: DirtyFlags,
    /// Total number of renders performed
    render_count: u64,
    /// Number of skipped renders (when nothing was dirty)
    skip_count: u64,
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderState {
    /// Create a new render state, initially clean
    pub fn new() -> Self {
        Self {
            dirty: DirtyFlags::NONE,
            render_count: 0,
            skip_count: 0,
        }
    }

    /// Check if any component needs rendering
    #[inline]
    pub fn needs_render(&self) -> bool {
        self.dirty.needs_render()
    }

    /// Mark specific components as dirty
    #[inline]
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty.insert(flags);
    }

    /// Mark all components as dirty (full redraw)
    #[inline]
    pub fn mark_all_dirty(&mut self) {
        self.dirty = DirtyFlags::ALL;
    }

    /// Clear all dirty flags after successful render
    #[inline]
    pub fn clear(&mut self) {
        self.dirty = DirtyFlags::NONE;
        self.render_count += 1;
    }

    /// Increment skip counter when render is skipped
    #[inline]
    pub fn skip(&mut self) {
        self.skip_count += 1;
    }

    /// Get rendering efficiency (percentage of renders that were skipped)
    #[allow(clippy::cast_precision_loss)]
    pub fn efficiency(&self) -> f64 {
        let total = self.render_count + self.skip_count;
        if total == 0 {
            0.0
        } else {
            (self.skip_count as f64 / total as f64) * 100.0
        }
    }

    /// Get statistics for logging/debugging
    pub fn stats(&self) -> String {
        format!(
            "renders: {}, skipped: {}, skip rate: {:.1}%",
            self.render_count,
            self.skip_count,
            self.efficiency()
        )
    }
}
