//! Events fed to the screen machine and the effects it asks for

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Fresh Activate press with the cursor on the unlock button
    UnlockRequested,
    /// Cursor moved; buttons under the old and new position
    CursorMoved {
        from: Option<usize>,
        to: Option<usize>,
    },
}

/// Side effects, applied by the controller in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Blank layers and panel, drop every button
    ClearAll,
    /// Render the home screen's loading text
    DrawLoadingMessage,
    /// Set the cursor's draw mode
    SetInverted(bool),
    /// Unfill a button
    Unfill(usize),
    /// Fill a button
    Fill(usize),
    /// Draw the cursor at its current position
    RedrawCursor,
}
