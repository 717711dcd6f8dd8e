/// Local physical parameters of a single spin site.
///
/// Every field defaults to `0.0`; a site description only needs to name
/// the parameters it actually uses.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeParameters {
    /// Spin magnitude.
    pub sm: f64,
    /// Spin fluctuation (flux) magnitude.
    pub fm: f64,
    /// Local spin-flux exchange coupling.
    pub je0m: f64,
    /// Single-site anisotropy constant.
    pub am: f64,
}

/// Coupling parameters carried by an edge between two spin sites.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeParameters {
    /// Heisenberg exchange coupling, spin-spin.
    pub jm: f64,
    /// Exchange coupling, spin with neighboring flux.
    pub je1m: f64,
    /// Exchange coupling, flux-flux.
    pub jeem: f64,
    /// Biquadratic coupling strength.
    pub bm: f64,
    /// Dzyaloshinskii-Moriya interaction vector. Directional: defined
    /// for the edge's source-to-destination orientation.
    pub dm: [f64; 3],
}

impl EdgeParameters {
    /// The same coupling as seen from the opposite orientation.
    ///
    /// The DM interaction is antisymmetric under exchange of the two
    /// sites, so `dm` flips sign; all scalar couplings are symmetric.
    pub fn reversed(&self) -> Self {
        Self {
            dm: [-self.dm[0], -self.dm[1], -self.dm[2]],
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_parameters_default_to_zero() {
        let p = NodeParameters::default();
        assert_eq!(p.sm, 0.0);
        assert_eq!(p.fm, 0.0);
        assert_eq!(p.je0m, 0.0);
        assert_eq!(p.am, 0.0);
    }

    #[test]
    fn edge_parameters_default_to_zero() {
        let p = EdgeParameters::default();
        assert_eq!(p.jm, 0.0);
        assert_eq!(p.dm, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn reversed_flips_dm_only() {
        let p = EdgeParameters {
            jm: 1.5,
            je1m: -0.25,
            jeem: 0.125,
            bm: 2.0,
            dm: [0.5, -1.0, 3.0],
        };
        let r = p.reversed();
        assert_eq!(r.jm, p.jm);
        assert_eq!(r.je1m, p.je1m);
        assert_eq!(r.jeem, p.jeem);
        assert_eq!(r.bm, p.bm);
        assert_eq!(r.dm, [-0.5, 1.0, -3.0]);
        assert_eq!(r.reversed(), p);
    }
}
