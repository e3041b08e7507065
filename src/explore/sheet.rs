use log::debug;

/// Smallest collapsed strip, in rows, so the handle stays visible.
const MIN_COLLAPSED_ROWS: u16 = 3;

/// Snap points of the bottom sheet. There is no closed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetPosition {
    Collapsed,
    #[default]
    Expanded,
}

impl SheetPosition {
    /// Share of the available height, in percent.
    #[must_use]
    pub fn snap_percent(self) -> u16 {
        match self {
            SheetPosition::Collapsed => 10,
            SheetPosition::Expanded => 100,
        }
    }
}

/// Monotonic counter used for change detection only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct RefreshCounter(u64);

impl RefreshCounter {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// The panel hosting the listing list over the map.
#[derive(Debug, Clone, Default)]
pub struct BottomSheet {
    position: SheetPosition,
    refresh: RefreshCounter,
}

impl BottomSheet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(&self) -> SheetPosition {
        self.position
    }

    #[must_use]
    pub fn refresh(&self) -> RefreshCounter {
        self.refresh
    }

    /// "Show Map": collapse and bump the refresh counter once.
    ///
    /// Only offered while expanded; returns `false` when there was nothing to do.
    pub fn show_map(&mut self) -> bool {
        if self.position != SheetPosition::Expanded {
            return false;
        }
        self.position = SheetPosition::Collapsed;
        self.refresh.bump();
        debug!("sheet collapsed, refresh counter {}", self.refresh.value());
        true
    }

    /// Manual drag to a snap point. Leaves the refresh counter alone.
    pub fn drag_to(&mut self, position: SheetPosition) {
        self.position = position;
    }

    /// Rows the sheet occupies out of `total`.
    #[must_use]
    pub fn height_for(&self, total: u16) -> u16 {
        match self.position {
            SheetPosition::Expanded => total,
            SheetPosition::Collapsed => {
                let percent = u32::from(self.position.snap_percent());
                let share = (u32::from(total) * percent).div_ceil(100);
                (share as u16).max(MIN_COLLAPSED_ROWS).min(total)
            }
        }
    }
}
