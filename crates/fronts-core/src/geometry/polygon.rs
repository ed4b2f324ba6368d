use serde::{Deserialize, Serialize};

use crate::crs::Crs;
use crate::error::{FrontsError, Result};

use super::BoundingBox;

/// A polygon made of an exterior ring and optional holes.
///
/// Rings are stored open: a closing vertex equal to the first one is
/// dropped on construction. Coordinates are `[x, y]` (lon, lat for
/// geographic CRSs).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonRepr", into = "PolygonRepr")]
pub struct Polygon {
    exterior: Vec<[f64; 2]>,
    holes: Vec<Vec<[f64; 2]>>,
    bbox: BoundingBox,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PolygonRepr {
    exterior: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    holes: Vec<Vec<[f64; 2]>>,
}

impl Polygon {
    pub fn new(exterior: Vec<[f64; 2]>, holes: Vec<Vec<[f64; 2]>>) -> Result<Self> {
        let exterior = open_ring(exterior, "exterior")?;
        let holes = holes
            .into_iter()
            .map(|h| open_ring(h, "hole"))
            .collect::<Result<Vec<_>>>()?;
        let bbox = BoundingBox::from_points(&exterior)
            .ok_or_else(|| FrontsError::InvalidGeometry("empty exterior ring".into()))?;

        Ok(Self {
            exterior,
            holes,
            bbox,
        })
    }

    /// Axis-aligned rectangle `[min_x, max_x] x [min_y, max_y]`.
    pub fn rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        Self::new(
            vec![
                [min_x, min_y],
                [max_x, min_y],
                [max_x, max_y],
                [min_x, max_y],
            ],
            vec![],
        )
    }

    pub fn exterior(&self) -> &[[f64; 2]] {
        &self.exterior
    }

    pub fn holes(&self) -> &[Vec<[f64; 2]>] {
        &self.holes
    }

    /// Exterior ring followed by every hole: the polygon boundary.
    pub fn rings(&self) -> impl Iterator<Item = &[[f64; 2]]> {
        std::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Whether `(x, y)` lies inside the exterior ring and outside all holes.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        if !self.bbox.contains_point(x, y) {
            return false;
        }
        ring_contains(&self.exterior, x, y) && !self.holes.iter().any(|h| ring_contains(h, x, y))
    }

    /// Transform every vertex with `f`.
    pub fn map_coords(&self, f: impl Fn(f64, f64) -> (f64, f64)) -> Result<Self> {
        let map_ring = |ring: &[[f64; 2]]| -> Vec<[f64; 2]> {
            ring.iter()
                .map(|p| {
                    let (x, y) = f(p[0], p[1]);
                    [x, y]
                })
                .collect()
        };
        Self::new(
            map_ring(&self.exterior),
            self.holes.iter().map(|h| map_ring(h)).collect(),
        )
    }
}

impl TryFrom<PolygonRepr> for Polygon {
    type Error = FrontsError;

    fn try_from(repr: PolygonRepr) -> Result<Self> {
        Polygon::new(repr.exterior, repr.holes)
    }
}

impl From<Polygon> for PolygonRepr {
    fn from(p: Polygon) -> Self {
        PolygonRepr {
            exterior: p.exterior,
            holes: p.holes,
        }
    }
}

/// Drop a repeated closing vertex and check at least three distinct,
/// finite vertices remain.
fn open_ring(mut ring: Vec<[f64; 2]>, what: &str) -> Result<Vec<[f64; 2]>> {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.iter().any(|p| !p[0].is_finite() || !p[1].is_finite()) {
        return Err(FrontsError::InvalidGeometry(format!(
            "{what} ring has a non-finite vertex"
        )));
    }

    let mut distinct: Vec<[f64; 2]> = Vec::with_capacity(3);
    for p in &ring {
        if !distinct.contains(p) {
            distinct.push(*p);
            if distinct.len() == 3 {
                return Ok(ring);
            }
        }
    }
    Err(FrontsError::InvalidGeometry(format!(
        "{what} ring needs at least 3 distinct vertices, got {}",
        distinct.len()
    )))
}

/// Even-odd ray casting test against a single open ring.
fn ring_contains(ring: &[[f64; 2]], x: f64, y: f64) -> bool {
    let n = ring.len();
    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];

        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// An ordered collection of polygons sharing one CRS.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskSet {
    pub crs: Crs,
    #[serde(default)]
    pub polygons: Vec<Polygon>,
}

impl MaskSet {
    pub fn new(polygons: Vec<Polygon>, crs: Crs) -> Self {
        Self { crs, polygons }
    }

    pub fn empty(crs: Crs) -> Self {
        Self::new(Vec::new(), crs)
    }

    /// Wrap a single polygon, e.g. an AOI, into a mask set.
    pub fn from_polygon(polygon: Polygon, crs: Crs) -> Self {
        Self::new(vec![polygon], crs)
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Whether `(x, y)` lies inside any polygon of the set.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.polygons.iter().any(|p| p.contains(x, y))
    }

    /// Enclosing box of every polygon, `None` for an empty set.
    pub fn bbox(&self) -> Option<BoundingBox> {
        self.polygons
            .iter()
            .map(Polygon::bbox)
            .reduce(|a, b| a.union(&b))
    }

    /// Reproject every vertex into `target`.
    pub fn to_crs(&self, target: Crs) -> Result<MaskSet> {
        if self.crs == target {
            return Ok(self.clone());
        }
        let source = self.crs;
        let polygons = self
            .polygons
            .iter()
            .map(|p| p.map_coords(|x, y| source.transform(target, x, y)))
            .collect::<Result<Vec<_>>>()?;
        Ok(MaskSet::new(polygons, target))
    }
}
