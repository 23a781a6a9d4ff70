//! Style bit constants shared by all widget kinds.

use bitflags::bitflags;

bitflags! {
    /// Style bits fixed at widget construction.
    ///
    /// The set a widget stores is immutable for its whole lifetime; leaf
    /// kinds normalize the requested bits (adding implied ones, collapsing
    /// mutually exclusive groups) before the widget stores them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u32 {
        /// No style bits requested.
        const NONE          = 0;

        /// Draw a border around the widget.
        const BORDER        = 1 << 0;

        /// Single-line / single-selection behavior.
        const SINGLE        = 1 << 1;

        /// Multi-line / multi-selection behavior.
        const MULTI         = 1 << 2;

        /// Content cannot be edited by the user.
        const READ_ONLY     = 1 << 3;

        /// Wrap content at the widget edge.
        const WRAP          = 1 << 4;

        /// Momentary push behavior (buttons, tool items).
        const PUSH          = 1 << 5;

        /// Two-state toggle behavior.
        const TOGGLE        = 1 << 6;

        /// Checkbox behavior.
        const CHECK         = 1 << 7;

        /// Flat appearance.
        const FLAT          = 1 << 8;

        /// Horizontal orientation (scrollbars, toolbars).
        const HORIZONTAL    = 1 << 9;

        /// Vertical orientation (scrollbars, toolbars).
        const VERTICAL      = 1 << 10;

        /// Owner creates a horizontal scrollbar satellite.
        const H_SCROLL      = 1 << 11;

        /// Owner creates a vertical scrollbar satellite.
        const V_SCROLL      = 1 << 12;

        /// Left-to-right widget direction.
        const LEFT_TO_RIGHT = 1 << 13;

        /// Right-to-left widget direction.
        const RIGHT_TO_LEFT = 1 << 14;
    }
}

impl StyleFlags {
    /// Returns true if either direction bit is set.
    #[inline]
    pub fn has_direction(&self) -> bool {
        self.intersects(Self::LEFT_TO_RIGHT | Self::RIGHT_TO_LEFT)
    }

    /// Collapses a group of mutually exclusive bits down to exactly one.
    ///
    /// If none of the group's bits are set, `default` is added. If more than
    /// one is set, only the lowest-valued bit of the group is kept.
    pub fn check_bits(self, group: StyleFlags, default: StyleFlags) -> StyleFlags {
        let present = self & group;
        if present.is_empty() {
            return self | default;
        }
        let lowest = StyleFlags::from_bits_truncate(1 << present.bits().trailing_zeros());
        (self - group) | lowest
    }
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self::NONE
    }
}
