//! Component variants and hook dispatch
//!
//! Components are a closed set of tagged variants. Which hooks each variant
//! implements, and whether the exporter knows how to serialize it, lives in a
//! single capability table ([`ComponentKind::capabilities`]) that both the
//! runtime and the exporter consult.

use super::components::{BoxCollider, MeshRenderer, PlayerController2D, Rotator};
use crate::foundation::math::Transform;
use crate::input::InputState;
use crate::render::RenderBackend;
use bitflags::bitflags;

bitflags! {
    /// Lifecycle hooks a component variant responds to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hooks: u8 {
        /// Fired once when the component is attached
        const AWAKE = 1 << 0;
        /// Fired every simulation frame
        const UPDATE = 1 << 1;
        /// Fired during the 3D draw pass
        const DRAW_3D = 1 << 2;
        /// Fired during the 2D overlay pass
        const DRAW_2D = 1 << 3;
    }
}

/// Discriminant of a [`Component`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// [`MeshRenderer`]
    MeshRenderer,
    /// [`BoxCollider`]
    BoxCollider,
    /// [`PlayerController2D`]
    PlayerController2D,
    /// [`Rotator`]
    Rotator,
}

/// Row of the capability table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Hooks the variant implements; all others are no-ops
    pub hooks: Hooks,
    /// Whether the exporter can reproduce the variant in generated code
    pub exportable: bool,
}

impl ComponentKind {
    /// Every known variant, in declaration order
    pub const ALL: [Self; 4] = [
        Self::MeshRenderer,
        Self::BoxCollider,
        Self::PlayerController2D,
        Self::Rotator,
    ];

    /// Type name as shown in the editor and the generated runtime
    pub const fn name(self) -> &'static str {
        match self {
            Self::MeshRenderer => "MeshRenderer",
            Self::BoxCollider => "BoxCollider",
            Self::PlayerController2D => "PlayerController2D",
            Self::Rotator => "Rotator",
        }
    }

    /// The capability table
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Self::MeshRenderer => Capabilities {
                hooks: Hooks::AWAKE.union(Hooks::DRAW_3D),
                exportable: true,
            },
            Self::BoxCollider => Capabilities {
                hooks: Hooks::empty(),
                exportable: true,
            },
            Self::PlayerController2D => Capabilities {
                hooks: Hooks::UPDATE,
                exportable: true,
            },
            // Demo-only behavior; generated programs have no equivalent.
            Self::Rotator => Capabilities {
                hooks: Hooks::UPDATE,
                exportable: false,
            },
        }
    }
}

/// Per-frame data handed to update hooks
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Input snapshot for this frame
    pub input: &'a InputState,
}

/// A behavior/data unit owned by exactly one entity
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// Draws a mesh at the entity transform
    MeshRenderer(MeshRenderer),
    /// Axis-aligned collision volume
    BoxCollider(BoxCollider),
    /// Arrow-key planar movement
    PlayerController2D(PlayerController2D),
    /// Constant spin
    Rotator(Rotator),
}

impl Component {
    /// Discriminant of this component
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::MeshRenderer(_) => ComponentKind::MeshRenderer,
            Self::BoxCollider(_) => ComponentKind::BoxCollider,
            Self::PlayerController2D(_) => ComponentKind::PlayerController2D,
            Self::Rotator(_) => ComponentKind::Rotator,
        }
    }

    /// Hooks this component responds to
    pub const fn hooks(&self) -> Hooks {
        self.kind().capabilities().hooks
    }

    /// Awake hook
    pub fn awake(&mut self) {
        if !self.hooks().contains(Hooks::AWAKE) {
            return;
        }
        if let Self::MeshRenderer(mesh) = self {
            mesh.awake();
        }
    }

    /// Update hook
    pub fn update(&mut self, transform: &mut Transform, ctx: &FrameContext<'_>) {
        if !self.hooks().contains(Hooks::UPDATE) {
            return;
        }
        match self {
            Self::PlayerController2D(controller) => controller.update(transform, ctx),
            Self::Rotator(rotator) => rotator.update(transform, ctx),
            Self::MeshRenderer(_) | Self::BoxCollider(_) => {}
        }
    }

    /// 3D draw hook
    pub fn draw_3d(&self, transform: &Transform, backend: &mut dyn RenderBackend) {
        if !self.hooks().contains(Hooks::DRAW_3D) {
            return;
        }
        if let Self::MeshRenderer(mesh) = self {
            mesh.draw_3d(transform, backend);
        }
    }

    /// 2D draw hook. No built-in variant draws in screen space yet.
    pub fn draw_2d(&self, _transform: &Transform, _backend: &mut dyn RenderBackend) {
        if !self.hooks().contains(Hooks::DRAW_2D) {
            return;
        }
        log::trace!("{} has no 2D drawing", self.kind().name());
    }
}

/// Typed access to one variant of [`Component`]
pub trait ComponentVariant: Default + Into<Component> + 'static {
    /// Discriminant of the variant
    const KIND: ComponentKind;

    /// Borrow the variant out of a component, if it matches
    fn from_component(component: &Component) -> Option<&Self>;

    /// Mutably borrow the variant out of a component, if it matches
    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! component_variant {
    ($ty:ident) => {
        impl From<$ty> for Component {
            fn from(value: $ty) -> Self {
                Component::$ty(value)
            }
        }

        impl ComponentVariant for $ty {
            const KIND: ComponentKind = ComponentKind::$ty;

            fn from_component(component: &Component) -> Option<&Self> {
                match component {
                    Component::$ty(value) => Some(value),
                    _ => None,
                }
            }

            fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                match component {
                    Component::$ty(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

component_variant!(MeshRenderer);
component_variant!(BoxCollider);
component_variant!(PlayerController2D);
component_variant!(Rotator);
