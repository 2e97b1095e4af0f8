use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::core::SurfaceSize;
use crate::render::{PathBuilder, RenderFrame, ShapeFrame};

/// Handle to a shape attached to a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(usize);

/// Uniform scale applied to the content group, anchored at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupTransform {
    pub scale: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

/// Fixed-size drawing surface with one transformable content group.
///
/// Shapes paint in the order they were added; later shapes draw on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: SurfaceSize,
    transform: Option<GroupTransform>,
    shapes: Vec<PathBuilder>,
}

impl Canvas {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            transform: None,
            shapes: Vec::new(),
        }
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Sets both the logical coordinate box and the output pixel box.
    ///
    /// The group transform is left untouched.
    pub fn set_size(&mut self, size: SurfaceSize) -> &mut Self {
        self.size = size;
        self
    }

    /// Scales the content group by `padding` around `(origin_x, origin_y)`.
    ///
    /// A padding of exactly `1` removes the transform.
    pub fn set_padding(&mut self, padding: f64, origin_x: f64, origin_y: f64) -> &mut Self {
        self.transform = (padding != 1.0).then_some(GroupTransform {
            scale: padding,
            origin_x,
            origin_y,
        });
        self
    }

    #[must_use]
    pub fn transform(&self) -> Option<GroupTransform> {
        self.transform
    }

    pub fn add(&mut self, shape: PathBuilder) -> ShapeId {
        self.shapes.push(shape);
        ShapeId(self.shapes.len() - 1)
    }

    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&PathBuilder> {
        self.shapes.get(id.0)
    }

    #[must_use]
    pub fn shapes(&self) -> &[PathBuilder] {
        &self.shapes
    }

    /// Snapshot of the surface, its group transform and the shapes in paint order.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            size: self.size,
            transform: self.transform,
            shapes: self.shapes.iter().map(ShapeFrame::from_path).collect(),
        }
    }
}

impl Index<ShapeId> for Canvas {
    type Output = PathBuilder;

    fn index(&self, id: ShapeId) -> &PathBuilder {
        &self.shapes[id.0]
    }
}

impl IndexMut<ShapeId> for Canvas {
    fn index_mut(&mut self, id: ShapeId) -> &mut PathBuilder {
        &mut self.shapes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::Canvas;
    use crate::core::SurfaceSize;
    use crate::render::PathBuilder;

    #[test]
    fn padding_of_one_removes_transform() {
        let mut canvas = Canvas::new(SurfaceSize::default());
        canvas.set_padding(0.5, 50.0, 50.0);
        let transform = canvas.transform().expect("scaled group");
        assert_eq!(transform.scale, 0.5);
        assert_eq!((transform.origin_x, transform.origin_y), (50.0, 50.0));

        canvas.set_padding(1.0, 100.0, 100.0);
        assert!(canvas.transform().is_none());
    }

    #[test]
    fn resizing_keeps_group_transform() {
        let mut canvas = Canvas::new(SurfaceSize::default());
        canvas.set_padding(0.8, 80.0, 80.0);
        canvas.set_size(SurfaceSize::new(300, 120));
        assert_eq!(canvas.size(), SurfaceSize::new(300, 120));
        assert!(canvas.transform().is_some());
    }

    #[test]
    fn shapes_paint_in_insertion_order() {
        let mut canvas = Canvas::new(SurfaceSize::default());
        let first = canvas.add(PathBuilder::new().with_class("a"));
        let second = canvas.add(PathBuilder::new().with_class("b"));
        canvas[second].move_to(1.0, 1.0, false);

        let frame = canvas.frame();
        let classes: Vec<_> = frame
            .shapes
            .iter()
            .map(|shape| shape.class_name.clone())
            .collect();
        assert_eq!(classes, vec![Some("a".to_owned()), Some("b".to_owned())]);
        assert!(canvas[first].is_empty());
        assert_eq!(frame.shapes[1].path, "M 1 1");
    }
}
