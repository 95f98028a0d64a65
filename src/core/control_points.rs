//! Geordnete, in der Kapazität begrenzte Kontrollpunkt-Liste.

use super::geometry::marker_contains;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Kapazität (feste Canvas-Varianten).
pub const DEFAULT_CAPACITY: usize = 256;

/// Form der Trefferzone um einen Kontrollpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitShape {
    /// Achsenparalleles Quadrat mit Kantenlänge `marker_size`, Ränder inklusive
    #[default]
    Square,
    /// Kreis mit Radius `marker_size`, Rand exklusive
    Radius,
}

impl HitShape {
    /// Prüft, ob `pos` die Trefferzone um `center` trifft.
    pub fn hits(self, center: Vec2, marker_size: f32, pos: Vec2) -> bool {
        match self {
            HitShape::Square => marker_contains(center, marker_size, pos),
            HitShape::Radius => center.distance(pos) < marker_size,
        }
    }
}

/// Kontrollpunkte in Einfügereihenfolge (definiert Grad und Auswertungsreihenfolge).
///
/// Punkte werden nur angehängt oder an Ort und Stelle verschoben, Indizes
/// bleiben daher über die gesamte Sitzung gültig.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointSet {
    points: Vec<Vec2>,
    capacity: usize,
}

impl ControlPointSet {
    /// Erstellt eine leere Liste mit fester Maximalgröße.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximale Anzahl an Punkten.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Gibt `true` zurück, solange noch Punkte angehängt werden können.
    pub fn has_room(&self) -> bool {
        self.points.len() < self.capacity
    }

    /// Read-only Sicht auf alle Punkte in Einfügereihenfolge.
    pub fn as_slice(&self) -> &[Vec2] {
        &self.points
    }

    /// Hängt einen Punkt an. Bei voller Liste passiert nichts (`false`).
    pub fn push(&mut self, pos: Vec2) -> bool {
        if !self.has_room() {
            return false;
        }
        self.points.push(pos);
        true
    }

    /// Überschreibt den Punkt an `index`. Ungültige Indizes werden ignoriert.
    pub(crate) fn set(&mut self, index: usize, pos: Vec2) {
        if let Some(point) = self.points.get_mut(index) {
            *point = pos;
        }
    }

    /// Erster Punkt (in Einfügereihenfolge), dessen Trefferzone `pos` enthält.
    pub fn hit_test(&self, pos: Vec2, marker_size: f32, shape: HitShape) -> Option<usize> {
        self.points
            .iter()
            .position(|&center| shape.hits(center, marker_size, pos))
    }
}

impl Default for ControlPointSet {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
