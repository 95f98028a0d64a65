//! Rohe Eingaben aus UI/System, noch ohne Mutationslogik.

/// Maustaste eines Zeiger-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Maustaste
    Primary,
    /// Rechte Maustaste
    Secondary,
    /// Mittlere Maustaste
    Middle,
    /// Zusatztasten
    Other,
}

/// Richtung einer Mausrad-Raste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Vom Benutzer weg
    Up,
    /// Zum Benutzer hin
    Down,
}

impl WheelDirection {
    /// +1 für `Up`, −1 für `Down`.
    pub fn sign(self) -> f32 {
        match self {
            WheelDirection::Up => 1.0,
            WheelDirection::Down => -1.0,
        }
    }

    /// Richtung aus dem vertikalen Scroll-Delta; 0 ergibt keine Raste.
    pub fn from_delta(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(WheelDirection::Up)
        } else if delta_y < 0.0 {
            Some(WheelDirection::Down)
        } else {
            None
        }
    }
}

/// Für den Editor relevante Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    /// Darstellung umschalten
    F1,
    /// Alle übrigen Tasten
    Other,
}

/// Eingabe-Ereignisse in Ankunftsreihenfolge.
///
/// Positionen sind logische Canvas-Koordinaten mit Ursprung oben links.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Maustaste gedrückt
    PointerDown {
        pos: glam::Vec2,
        button: PointerButton,
    },
    /// Maustaste losgelassen
    PointerUp { button: PointerButton },
    /// Zeiger bewegt
    PointerMove { pos: glam::Vec2 },
    /// Mausrad um eine Raste gedreht
    Wheel { direction: WheelDirection },
    /// Taste gedrückt (ohne Wiederholung)
    KeyPress { key: EditorKey },
    /// Fenster soll geschlossen werden
    Quit,
}
