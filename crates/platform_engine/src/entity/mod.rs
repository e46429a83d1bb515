//! Entity/component model
//!
//! An [`Entity`] is a bag of capability units ([`Component`]s) plus a
//! `renderable` flag. Components are a tagged enum rather than trait objects:
//! lookup is by [`ComponentKind`] with at most one component of each kind per
//! entity, and ownership is exclusive (component lifetime equals entity
//! lifetime). A lookup miss is an ordinary `None`, not an error — callers are
//! expected to check and degrade gracefully.

mod sprite;

pub use sprite::Sprite;

use crate::backend::PresentationBackend;

/// The kinds of capability an entity can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Visual representation
    Sprite,
}

/// A capability unit attached to an entity
pub enum Component {
    /// Visual representation
    Sprite(Sprite),
}

impl Component {
    /// The kind tag of this component
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Sprite(_) => ComponentKind::Sprite,
        }
    }

    fn update(&mut self, dt: f32) {
        match self {
            Component::Sprite(sprite) => sprite.update(dt),
        }
    }

    fn render(&self, backend: &mut dyn PresentationBackend) {
        match self {
            Component::Sprite(sprite) => sprite.render(backend),
        }
    }
}

/// A composable game object holding zero or more components
///
/// Components update and render in insertion order. For food entities the
/// `renderable` flag doubles as the "consumed" flag: once eaten the entity is
/// hidden and excluded from scoring, but stays in its collection.
#[derive(Default)]
pub struct Entity {
    components: Vec<Component>,
    renderable: bool,
}

impl Entity {
    /// Create an empty, renderable entity
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            renderable: true,
        }
    }

    /// Attach a component, returning a handle to it
    ///
    /// At most one component of each kind may be attached.
    pub fn add_component(&mut self, component: Component) -> &mut Component {
        debug_assert!(
            self.component(component.kind()).is_none(),
            "duplicate component kind {:?}",
            component.kind()
        );
        self.components.push(component);
        self.components.last_mut().expect("just pushed")
    }

    /// Look up the component of `kind`, if attached
    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.iter().find(|c| c.kind() == kind)
    }

    /// Mutable variant of [`component`](Self::component)
    pub fn component_mut(&mut self, kind: ComponentKind) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.kind() == kind)
    }

    /// Typed access to the sprite component
    pub fn sprite(&self) -> Option<&Sprite> {
        match self.component(ComponentKind::Sprite) {
            Some(Component::Sprite(sprite)) => Some(sprite),
            None => None,
        }
    }

    /// Typed mutable access to the sprite component
    pub fn sprite_mut(&mut self) -> Option<&mut Sprite> {
        match self.component_mut(ComponentKind::Sprite) {
            Some(Component::Sprite(sprite)) => Some(sprite),
            None => None,
        }
    }

    /// Update every component in insertion order
    pub fn update(&mut self, dt: f32) {
        for component in &mut self.components {
            component.update(dt);
        }
    }

    /// Render every component in insertion order, if the entity is renderable
    pub fn render(&self, backend: &mut dyn PresentationBackend) {
        if !self.renderable {
            return;
        }
        for component in &self.components {
            component.render(backend);
        }
    }

    /// Set the entity's renderable state
    pub fn set_renderable(&mut self, value: bool) {
        self.renderable = value;
    }

    /// Whether the entity should be rendered
    pub fn is_renderable(&self) -> bool {
        self.renderable
    }

    /// AABB overlap test against another entity's sprite
    ///
    /// Runs on integer-truncated rectangles; entities without sprites never
    /// intersect anything.
    pub fn intersects(&self, other: &Entity) -> bool {
        match (self.sprite(), other.sprite()) {
            (Some(ours), Some(theirs)) => ours.rect().intersects(&theirs.rect()),
            _ => false,
        }
    }
}
