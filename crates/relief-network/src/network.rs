//! Area/road network model.
//!
//! # Data layout
//!
//! Nodes are numbered sequentially by insertion.  `NodeId(0)` is always the
//! relief center; area `i` (0-based, insertion order) is `NodeId(i + 1)`.
//!
//! Roads are undirected and stored as an **adjacency list**: each node owns a
//! `Vec<Link>` in the order its roads were first declared.  Declaring the
//! same pair again overwrites the weight in place (last write wins), so the
//! graph is always simple and Dijkstra sees one authoritative weight.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest area.  It is
//! kept in sync on every coordinate change so presentation layers can
//! resolve a map click to an area without scanning.

use std::collections::HashMap;

use log::{debug, warn};
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use relief_core::{CenterLinkPolicy, CoordinatePolicy, GeoPoint, NodeId, ReliefConfig, Severity};

use crate::{NetworkError, NetworkResult};

// ── R-tree area entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone, PartialEq, Debug)]
struct AreaEntry {
    point: [f64; 2], // [lat, lon]
    id:    NodeId,
}

impl AreaEntry {
    fn new(pos: GeoPoint, id: NodeId) -> Self {
        Self { point: [pos.lat, pos.lon], id }
    }
}

impl RTreeObject for AreaEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AreaEntry {
    /// Squared Euclidean distance in lat/lon space.  Good enough for
    /// nearest-area queries at regional scale.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Public value types ────────────────────────────────────────────────────────

/// An affected area.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub name:     String,
    pub id:       NodeId,
    pub severity: Severity,
    pub position: GeoPoint,
    /// Whether relief has been delivered.  Not read by ranking or routing.
    pub served:   bool,
}

/// Where a road came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoadKind {
    /// Added through [`NetworkModel::add_road`].
    Declared,
    /// Synthesised by [`CenterLinkPolicy::AutoHaversine`].
    CenterLink,
}

/// One half of an undirected road, as seen from its owning node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub to:          NodeId,
    pub distance_km: f64,
    pub kind:        RoadKind,
}

/// An undirected road, listed once per pair by [`NetworkModel::roads`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub from:        String,
    pub to:          String,
    pub distance_km: f64,
    pub kind:        RoadKind,
}

// ── NetworkModel ──────────────────────────────────────────────────────────────

/// Weighted undirected graph of the relief center and affected areas.
///
/// Mutation takes `&mut self`; every query takes `&self`.  A host that
/// shares a model across threads wraps it in an `RwLock`.
#[derive(Clone)]
pub struct NetworkModel {
    center_name: String,
    center:      GeoPoint,

    coordinate_policy: CoordinatePolicy,
    center_links:      CenterLinkPolicy,

    /// Area data in insertion order.  `areas[i].id == NodeId(i + 1)`.
    areas:     Vec<Area>,
    lookup:    HashMap<String, NodeId>,
    /// Indexed by `NodeId`; entry 0 is the center.
    adjacency: Vec<Vec<Link>>,

    spatial_idx: RTree<AreaEntry>,
}

impl NetworkModel {
    /// Create a model holding only the relief center.
    pub fn new(config: &ReliefConfig) -> NetworkResult<Self> {
        config.validate()?;

        let mut lookup = HashMap::new();
        lookup.insert(config.center_name.clone(), NodeId::CENTER);

        Ok(Self {
            center_name:       config.center_name.clone(),
            center:            config.center,
            coordinate_policy: config.coordinate_policy,
            center_links:      config.center_links,
            areas:             Vec::new(),
            lookup,
            adjacency:         vec![Vec::new()],
            spatial_idx:       RTree::new(),
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of nodes including the relief center.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Number of undirected roads.
    pub fn road_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(i, links)| links.iter().filter(|l| l.to.index() >= i).count())
            .sum()
    }

    /// `true` when no areas are registered (the center alone does not count).
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    // ── Node lookup ───────────────────────────────────────────────────────

    pub fn center_name(&self) -> &str {
        &self.center_name
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn coordinate_policy(&self) -> &CoordinatePolicy {
        &self.coordinate_policy
    }

    pub fn center_links(&self) -> CenterLinkPolicy {
        self.center_links
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.lookup.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Name of `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this model.
    pub fn node_name(&self, id: NodeId) -> &str {
        if id == NodeId::CENTER {
            &self.center_name
        } else {
            &self.areas[id.index() - 1].name
        }
    }

    /// Position of `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this model.
    pub fn node_position(&self, id: NodeId) -> GeoPoint {
        if id == NodeId::CENTER {
            self.center
        } else {
            self.areas[id.index() - 1].position
        }
    }

    pub fn area(&self, name: &str) -> Option<&Area> {
        match self.node_id(name)? {
            NodeId::CENTER => None,
            id => self.areas.get(id.index() - 1),
        }
    }

    /// All areas in insertion order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// All areas keyed by name.
    pub fn all_areas(&self) -> HashMap<&str, &Area> {
        self.areas.iter().map(|a| (a.name.as_str(), a)).collect()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert or overwrite the area called `name`.
    ///
    /// Re-adding an existing name keeps its `NodeId` (and therefore its
    /// insertion-order position) but replaces severity and coordinates and
    /// resets `served`.  Roads touching the area are kept.
    pub fn add_area(
        &mut self,
        name: impl Into<String>,
        severity: i32,
        position: GeoPoint,
    ) -> NetworkResult<NodeId> {
        let name = name.into();
        let severity = Severity::new(severity)?;
        let position = position.validate()?;

        if name == self.center_name {
            return Err(NetworkError::ReservedName(name));
        }

        let id = match self.lookup.get(&name).copied() {
            Some(id) => {
                let area = &mut self.areas[id.index() - 1];
                warn!(
                    "area {name:?} re-added: severity {} -> {}, position {} -> {}",
                    area.severity.get(),
                    severity.get(),
                    area.position,
                    position,
                );
                self.spatial_idx.remove(&AreaEntry::new(area.position, id));
                area.severity = severity;
                area.position = position;
                area.served = false;
                id
            }
            None => {
                let id = NodeId(self.node_count() as u32);
                debug!("area {name:?} added as {id} at {position}, severity {}", severity.get());
                self.lookup.insert(name.clone(), id);
                self.areas.push(Area { name, id, severity, position, served: false });
                self.adjacency.push(Vec::new());
                id
            }
        };

        self.spatial_idx.insert(AreaEntry::new(position, id));
        self.refresh_center_link(id)?;
        Ok(id)
    }

    /// Like [`add_area`](Self::add_area) with the position chosen by the
    /// configured [`CoordinatePolicy`].  An existing area keeps its grid slot.
    pub fn add_area_auto(&mut self, name: impl Into<String>, severity: i32) -> NetworkResult<NodeId> {
        let name = name.into();
        let slot = match self.node_id(&name) {
            Some(id) if id != NodeId::CENTER => id.index() - 1,
            _ => self.areas.len(),
        };
        let position = self.coordinate_policy.position_for(slot);
        self.add_area(name, severity, position)
    }

    /// Move an existing area.
    pub fn set_coordinates(&mut self, name: &str, position: GeoPoint) -> NetworkResult<()> {
        let position = position.validate()?;
        let id = self.area_id(name)?;

        let area = &mut self.areas[id.index() - 1];
        self.spatial_idx.remove(&AreaEntry::new(area.position, id));
        debug!("area {name:?} moved {} -> {}", area.position, position);
        area.position = position;
        self.spatial_idx.insert(AreaEntry::new(position, id));

        self.refresh_center_link(id)
    }

    pub fn set_served(&mut self, name: &str, served: bool) -> NetworkResult<()> {
        let id = self.area_id(name)?;
        self.areas[id.index() - 1].served = served;
        Ok(())
    }

    /// Add (or overwrite) the undirected road `from` ↔ `to`.
    ///
    /// Both endpoints must already be registered; the relief center counts.
    pub fn add_road(&mut self, from: &str, to: &str, distance_km: f64) -> NetworkResult<()> {
        let a = self
            .node_id(from)
            .ok_or_else(|| NetworkError::MissingEndpoint(from.to_owned()))?;
        let b = self
            .node_id(to)
            .ok_or_else(|| NetworkError::MissingEndpoint(to.to_owned()))?;

        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(NetworkError::InvalidDistance {
                from: from.to_owned(),
                to: to.to_owned(),
                distance_km,
            });
        }

        if let Some(old) = self.link(a, b) {
            debug!("road {from:?} - {to:?} overwritten: {} -> {distance_km} km", old.distance_km);
        } else {
            debug!("road {from:?} - {to:?} added: {distance_km} km");
        }
        self.set_link(a, b, distance_km, RoadKind::Declared);
        Ok(())
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Adjacency of `id` in road insertion order.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this model.
    #[inline]
    pub fn links(&self, id: NodeId) -> &[Link] {
        &self.adjacency[id.index()]
    }

    /// The link from `a` to `b`, if a road joins them.
    pub fn link(&self, a: NodeId, b: NodeId) -> Option<&Link> {
        self.adjacency.get(a.index())?.iter().find(|l| l.to == b)
    }

    /// `(neighbor name, distance km)` pairs for the node called `name`.
    pub fn neighbors(&self, name: &str) -> NetworkResult<impl Iterator<Item = (&str, f64)> + '_> {
        let id = self
            .node_id(name)
            .ok_or_else(|| NetworkError::UnknownNode(name.to_owned()))?;
        Ok(self
            .links(id)
            .iter()
            .map(|l| (self.node_name(l.to), l.distance_km)))
    }

    /// Every undirected road once, ordered by its lower-numbered endpoint.
    pub fn roads(&self) -> Vec<Road> {
        let mut roads = Vec::with_capacity(self.road_count());
        for (i, links) in self.adjacency.iter().enumerate() {
            for l in links.iter().filter(|l| l.to.index() >= i) {
                roads.push(Road {
                    from:        self.node_name(NodeId(i as u32)).to_owned(),
                    to:          self.node_name(l.to).to_owned(),
                    distance_km: l.distance_km,
                    kind:        l.kind,
                });
            }
        }
        roads
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The area closest to `pos`, or `None` if no areas exist.
    pub fn nearest_area(&self, pos: GeoPoint) -> Option<&Area> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| &self.areas[e.id.index() - 1])
    }

    /// Up to `k` areas nearest to `pos`, sorted by ascending distance.
    pub fn k_nearest_areas(&self, pos: GeoPoint, k: usize) -> Vec<&Area> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| &self.areas[e.id.index() - 1])
            .collect()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn area_id(&self, name: &str) -> NetworkResult<NodeId> {
        match self.node_id(name) {
            Some(NodeId::CENTER) => Err(NetworkError::ReservedName(name.to_owned())),
            Some(id) => Ok(id),
            None => Err(NetworkError::UnknownNode(name.to_owned())),
        }
    }

    /// Write both halves of `a` ↔ `b`.  A center link never replaces a
    /// declared road.
    fn set_link(&mut self, a: NodeId, b: NodeId, distance_km: f64, kind: RoadKind) {
        if kind == RoadKind::CenterLink
            && self.link(a, b).is_some_and(|l| l.kind == RoadKind::Declared)
        {
            return;
        }
        upsert_link(&mut self.adjacency[a.index()], b, distance_km, kind);
        if a != b {
            upsert_link(&mut self.adjacency[b.index()], a, distance_km, kind);
        }
    }

    fn refresh_center_link(&mut self, id: NodeId) -> NetworkResult<()> {
        if self.center_links != CenterLinkPolicy::AutoHaversine {
            return Ok(());
        }
        let d = self.center.distance_km(self.node_position(id))?;
        self.set_link(NodeId::CENTER, id, d, RoadKind::CenterLink);
        Ok(())
    }
}

fn upsert_link(links: &mut Vec<Link>, to: NodeId, distance_km: f64, kind: RoadKind) {
    match links.iter_mut().find(|l| l.to == to) {
        Some(l) => {
            l.distance_km = distance_km;
            l.kind = kind;
        }
        None => links.push(Link { to, distance_km, kind }),
    }
}
