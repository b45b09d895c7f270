//! Per-frame scene object simulation.
//!
//! Each object is split into an immutable `ObjectSpec` (what it is) and a
//! small `Copy` `ObjectState` (where it is now). A frame is a pure function
//! `next_state(spec, state, input, params) -> state`, applied to every object
//! of the active mode; replaying the same inputs reproduces the same frames.
//!
//! Floating objects pipeline, in order:
//! 1. project the cursor into scene units,
//! 2. cursor repulsion (skipped while hovered),
//! 3. repulsion from UI exclusion zones,
//! 4. clamp into the safe region.
//!
//! Idle bob/spin and hover emphasis are applied on top at render time so they
//! never feed back into the simulated position.

use fnv::FnvHashMap;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

use super::constants::*;
use super::cursor::Capabilities;
use super::tween::{approach_alpha, lerp, Easing, Tween};

pub type ObjectId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Repelled, clamped, bobbing.
    Floating,
    /// Eases toward an externally set anchor; hover emphasis only.
    Anchored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResourceState {
    /// Nothing to wait for.
    Ready,
    /// Image not loaded yet; rendered fully transparent.
    Pending,
    /// Loaded at the given session time; fades in.
    Loaded { at_sec: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectSpec {
    pub id: ObjectId,
    pub label: String,
    pub caps: Capabilities,
    pub motion: Motion,
    pub color: [f32; 3],
    /// Quad half extents in scene units.
    pub half_size: [f32; 2],
    pub base_scale: f32,
    pub rest_rotation: Vec3,
    /// Idle oscillation offset.
    pub phase: f32,
}

impl ObjectSpec {
    /// Radius used for pointer picking.
    pub fn pick_radius(&self) -> f32 {
        self.half_size[0].max(self.half_size[1]) * self.base_scale
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectState {
    pub position: Vec3,
    pub anchor: Vec3,
    pub scale_factor: f32,
    pub anchor_scale: f32,
    pub opacity_factor: f32,
    pub anchor_opacity: f32,
    pub hovered: bool,
    /// 0 idle .. 1 fully emphasized.
    pub emphasis: Tween,
    pub resource: ResourceState,
}

impl ObjectState {
    pub fn at(position: Vec3, resource: ResourceState, hover_tween_sec: f32) -> Self {
        Self {
            position,
            anchor: position,
            scale_factor: 1.0,
            anchor_scale: 1.0,
            opacity_factor: 1.0,
            anchor_opacity: 1.0,
            hovered: false,
            emphasis: Tween::settled(0.0, Easing::Power2Out, hover_tween_sec),
            resource,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExclusionZone {
    pub center_ndc: Vec2,
    pub radius_ndc: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimParams {
    pub cursor_extent: Vec2,
    pub repel_radius: f32,
    pub repel_gain: f32,
    pub repel_min_step: f32,
    pub zones: Vec<ExclusionZone>,
    pub zone_gain: f32,
    pub safe_fraction: Vec2,
    pub safe_depth: [f32; 2],
    pub bob_amplitude: f32,
    pub bob_rate: f32,
    pub spin_rate: Vec2,
    pub hover_tween_sec: f32,
    pub hover_scale_boost: f32,
    pub emissive_idle: f32,
    pub emissive_hover: f32,
    pub load_fade_sec: f32,
    pub anchor_tau_sec: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            cursor_extent: Vec2::from(CURSOR_EXTENT),
            repel_radius: REPEL_RADIUS,
            repel_gain: REPEL_GAIN,
            repel_min_step: REPEL_MIN_STEP,
            zones: vec![ExclusionZone {
                center_ndc: Vec2::from(DIAL_ZONE_CENTER),
                radius_ndc: DIAL_ZONE_RADIUS,
            }],
            zone_gain: ZONE_GAIN,
            safe_fraction: Vec2::from(SAFE_FRACTION),
            safe_depth: SAFE_DEPTH,
            bob_amplitude: BOB_AMPLITUDE,
            bob_rate: BOB_RATE,
            spin_rate: Vec2::from(SPIN_RATE),
            hover_tween_sec: HOVER_TWEEN_SEC,
            hover_scale_boost: HOVER_SCALE_BOOST,
            emissive_idle: EMISSIVE_IDLE,
            emissive_hover: EMISSIVE_HOVER,
            load_fade_sec: LOAD_FADE_SEC,
            anchor_tau_sec: CARD_EASE_TAU_SEC,
        }
    }
}

impl SimParams {
    /// Half extents of the region floating objects are clamped into.
    pub fn safe_half_extent(&self) -> Vec2 {
        self.safe_fraction * self.cursor_extent
    }

    /// Viewport-space cursor projected onto the scene's z=0 plane.
    pub fn project_cursor(&self, cursor_ndc: Vec2) -> Vec3 {
        let p = cursor_ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0)) * self.cursor_extent;
        Vec3::new(p.x, p.y, 0.0)
    }
}

/// Per-frame inputs. `cursor_ndc` is in [-1, 1] with +y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub cursor_ndc: Vec2,
    pub time_sec: f32,
    pub dt_sec: f32,
}

/// Viewport pixels to normalized device coordinates (+y up).
pub fn viewport_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((x / w) * 2.0 - 1.0, 1.0 - (y / h) * 2.0)
}

/// Everything the renderer needs for one object this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderInstance {
    pub id: ObjectId,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub half_size: [f32; 2],
    pub color: [f32; 3],
    pub emissive: f32,
    pub opacity: f32,
}

// ---------------- the frame function ----------------

pub fn next_state(
    spec: &ObjectSpec,
    state: &ObjectState,
    input: &FrameInput,
    params: &SimParams,
) -> ObjectState {
    let mut next = *state;
    match spec.motion {
        Motion::Floating => {
            let mut pos = state.position;
            if !state.hovered {
                let cursor = params.project_cursor(input.cursor_ndc);
                pos += cursor_push(pos, cursor, params);
            }
            pos += zone_push(pos, params);
            next.position = clamp_to_safe(pos, params);
        }
        Motion::Anchored => {
            let a = approach_alpha(input.dt_sec, params.anchor_tau_sec);
            next.position = state.position.lerp(state.anchor, a);
            next.scale_factor = lerp(state.scale_factor, state.anchor_scale, a);
            next.opacity_factor = lerp(state.opacity_factor, state.anchor_opacity, a);
        }
    }
    next
}

/// Push away from the projected cursor, proportional to how far inside the
/// radius the object sits.
pub fn cursor_push(pos: Vec3, cursor: Vec3, params: &SimParams) -> Vec3 {
    let away = pos - cursor;
    let distance = away.length();
    if distance >= params.repel_radius {
        return Vec3::ZERO;
    }
    let dir = if distance > 1e-5 { away / distance } else { Vec3::Y };
    let force = ((params.repel_radius - distance) * params.repel_gain).max(params.repel_min_step);
    dir * force
}

/// Push away from reserved screen regions; zones live in ndc, the push is
/// returned in scene units.
pub fn zone_push(pos: Vec3, params: &SimParams) -> Vec3 {
    let extent = params.cursor_extent;
    let ndc = Vec2::new(pos.x, pos.y) / extent;
    let mut push = Vec2::ZERO;
    for zone in &params.zones {
        let away = ndc - zone.center_ndc;
        let distance = away.length();
        if distance >= zone.radius_ndc {
            continue;
        }
        // dead centre: move toward the middle of the screen
        let dir = if distance > 1e-5 {
            away / distance
        } else {
            (-zone.center_ndc).normalize_or_zero()
        };
        push += dir * (zone.radius_ndc - distance) * params.zone_gain;
    }
    let push = push * extent;
    Vec3::new(push.x, push.y, 0.0)
}

pub fn clamp_to_safe(pos: Vec3, params: &SimParams) -> Vec3 {
    let half = params.safe_half_extent();
    Vec3::new(
        pos.x.clamp(-half.x, half.x),
        pos.y.clamp(-half.y, half.y),
        pos.z.clamp(params.safe_depth[0], params.safe_depth[1]),
    )
}

/// Presentation transform: simulated position plus idle motion and hover emphasis.
pub fn render_instance(
    spec: &ObjectSpec,
    state: &ObjectState,
    time_sec: f32,
    params: &SimParams,
) -> RenderInstance {
    let w = state.emphasis.value(time_sec).clamp(0.0, 1.0);
    let mut position = state.position;
    let mut idle_rotation = spec.rest_rotation;
    if spec.motion == Motion::Floating && !state.hovered {
        position.y += (time_sec * params.bob_rate + spec.phase).sin() * params.bob_amplitude * (1.0 - w);
        idle_rotation.x += params.spin_rate.x * time_sec;
        idle_rotation.y += params.spin_rate.y * time_sec;
    }
    // emphasis turns the object to face the camera (zero rotation)
    let rotation = Vec3::new(
        lerp_angle(idle_rotation.x, 0.0, w),
        lerp_angle(idle_rotation.y, 0.0, w),
        lerp_angle(idle_rotation.z, 0.0, w),
    );
    RenderInstance {
        id: spec.id,
        position,
        rotation,
        scale: spec.base_scale * state.scale_factor * (1.0 + params.hover_scale_boost * w),
        half_size: spec.half_size,
        color: spec.color,
        emissive: lerp(params.emissive_idle, params.emissive_hover, w),
        opacity: resource_opacity(state.resource, time_sec, params.load_fade_sec)
            * state.opacity_factor,
    }
}

pub fn resource_opacity(resource: ResourceState, time_sec: f32, fade_sec: f32) -> f32 {
    match resource {
        ResourceState::Ready => 1.0,
        ResourceState::Pending => 0.0,
        ResourceState::Loaded { at_sec } => {
            if fade_sec <= 0.0 {
                1.0
            } else {
                ((time_sec - at_sec) / fade_sec).clamp(0.0, 1.0)
            }
        }
    }
}

fn wrap_angle(a: f32) -> f32 {
    (a + PI).rem_euclid(2.0 * PI) - PI
}

fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let from = wrap_angle(from);
    from + wrap_angle(to - from) * t
}

// ---------------- the simulator ----------------

/// Hover edge reported by `set_hovered`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverChange {
    pub left: Option<ObjectId>,
    pub entered: Option<ObjectId>,
}

#[derive(Clone, Debug, Default)]
pub struct SceneObjectSimulator {
    params: SimParams,
    specs: Vec<ObjectSpec>,
    states: Vec<ObjectState>,
    scratch: Vec<ObjectState>,
    index: FnvHashMap<ObjectId, usize>,
    hovered: Option<ObjectId>,
}

impl SceneObjectSimulator {
    pub fn new(params: SimParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Replace every object; nothing carries over from the previous scene.
    pub fn load(&mut self, objects: Vec<(ObjectSpec, ObjectState)>) {
        self.specs.clear();
        self.states.clear();
        self.index.clear();
        self.hovered = None;
        for (i, (spec, state)) in objects.into_iter().enumerate() {
            self.index.insert(spec.id, i);
            self.specs.push(spec);
            self.states.push(state);
        }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn spec(&self, id: ObjectId) -> Option<&ObjectSpec> {
        self.index.get(&id).map(|&i| &self.specs[i])
    }

    pub fn state(&self, id: ObjectId) -> Option<&ObjectState> {
        self.index.get(&id).map(|&i| &self.states[i])
    }

    pub fn objects(&self) -> impl Iterator<Item = (&ObjectSpec, &ObjectState)> {
        self.specs.iter().zip(self.states.iter())
    }

    pub fn hovered(&self) -> Option<ObjectId> {
        self.hovered
    }

    /// One frame for every object. The previous state vector is kept as scratch.
    pub fn step(&mut self, input: &FrameInput) {
        let mut next = std::mem::take(&mut self.scratch);
        next.clear();
        next.extend(
            self.specs
                .iter()
                .zip(self.states.iter())
                .map(|(spec, state)| next_state(spec, state, input, &self.params)),
        );
        self.scratch = std::mem::replace(&mut self.states, next);
    }

    /// Move the hover to `id` (or nowhere). Only interactive objects can be
    /// hovered. Starts the emphasis tweens for both edges.
    pub fn set_hovered(&mut self, id: Option<ObjectId>, now_sec: f32) -> HoverChange {
        let id = id.filter(|id| self.spec(*id).map(|s| s.caps.interactive).unwrap_or(false));
        if id == self.hovered {
            return HoverChange::default();
        }
        let change = HoverChange {
            left: self.hovered,
            entered: id,
        };
        if let Some(prev) = change.left {
            self.with_state(prev, |s| {
                s.hovered = false;
                s.emphasis.retarget(0.0, now_sec);
            });
        }
        if let Some(next) = change.entered {
            self.with_state(next, |s| {
                s.hovered = true;
                s.emphasis.retarget(1.0, now_sec);
            });
        }
        self.hovered = id;
        change
    }

    /// Image finished loading; the object fades in from now.
    pub fn mark_loaded(&mut self, id: ObjectId, now_sec: f32) {
        self.with_state(id, |s| {
            if s.resource == ResourceState::Pending {
                s.resource = ResourceState::Loaded { at_sec: now_sec };
            }
        });
    }

    pub fn set_anchor(&mut self, id: ObjectId, anchor: Vec3, scale: f32, opacity: f32) {
        self.with_state(id, |s| {
            s.anchor = anchor;
            s.anchor_scale = scale;
            s.anchor_opacity = opacity;
        });
    }

    pub fn instances(&self, time_sec: f32) -> impl Iterator<Item = RenderInstance> + '_ {
        self.objects()
            .map(move |(spec, state)| render_instance(spec, state, time_sec, &self.params))
    }

    /// Picking spheres for interactive objects: (id, centre, radius).
    pub fn pick_targets(&self) -> impl Iterator<Item = (ObjectId, Vec3, f32)> + '_ {
        self.objects()
            .filter(|(spec, _)| spec.caps.interactive)
            .map(|(spec, state)| (spec.id, state.position, spec.pick_radius() * state.scale_factor))
    }

    fn with_state(&mut self, id: ObjectId, f: impl FnOnce(&mut ObjectState)) {
        if let Some(&i) = self.index.get(&id) {
            f(&mut self.states[i]);
        }
    }
}
