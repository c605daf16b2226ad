use crate::shape::Shape;
use crate::surface::Surface;

/// Counts from one [`ShapeStore::advance`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvanceStats {
    pub drawn: usize,
    pub expired: usize,
}

/// Every live shape. Generators append; only the render loop ages and
/// removes entries. Draw order is not significant.
#[derive(Clone, Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Age, move and draw every shape once, dropping the ones that expire.
    ///
    /// Walks from the back so `swap_remove` only ever pulls an
    /// already-visited shape into the freed slot.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S) -> AdvanceStats {
        let mut stats = AdvanceStats::default();
        for i in (0..self.shapes.len()).rev() {
            if self.shapes[i].advance(surface) {
                stats.drawn += 1;
            } else {
                self.shapes.swap_remove(i);
                stats.expired += 1;
            }
        }
        stats
    }
}

impl Extend<Shape> for ShapeStore {
    fn extend<T: IntoIterator<Item = Shape>>(&mut self, iter: T) {
        self.shapes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ShapeStore {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
