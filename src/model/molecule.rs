use super::error::Error;
use super::params::{EdgeParameters, NodeParameters};

/// A single spin site with its local parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub index: u32,
    pub parameters: NodeParameters,
}

/// A directed coupling record between two sites.
///
/// `source` and `dest` fix the orientation the [`EdgeParameters::dm`]
/// vector is expressed in; see [`EdgeParameters::reversed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub index: u32,
    pub source: u32,
    pub dest: u32,
    pub parameters: EdgeParameters,
}

/// The in-memory prototype of a molecular spin-transport device: spin
/// sites, couplings between them, and the two electrical lead contacts.
///
/// The graph is append-only. Nodes receive dense indices in creation
/// order, edges may only reference nodes that already exist, and lead
/// designations are validated when set. A `MolProto` is built once by a
/// single compilation pass and not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MolProto {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    left_lead: Option<u32>,
    right_lead: Option<u32>,
}

impl MolProto {
    /// Creates an empty molecule with no nodes, edges, or leads.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a molecule with `n` nodes sharing the given parameters,
    /// and no edges.
    pub fn with_nodes(n: u32, parameters: NodeParameters) -> Self {
        let mut mol = Self::new();
        for _ in 0..n {
            mol.create_node(parameters);
        }
        mol
    }

    /// Appends a node and returns its index.
    ///
    /// Indices are dense: the i-th created node has index `i`.
    pub fn create_node(&mut self, parameters: NodeParameters) -> u32 {
        let index = self.nodes.len() as u32;
        self.nodes.push(Node { index, parameters });
        index
    }

    /// Connects two existing nodes and returns the new edge's index.
    ///
    /// Both endpoints must already exist; on failure the edge collection
    /// is left unchanged. Duplicate edges between the same pair and
    /// self-loops are not rejected.
    pub fn connect_nodes(
        &mut self,
        source: u32,
        dest: u32,
        parameters: EdgeParameters,
    ) -> Result<u32, Error> {
        self.check_node(source)?;
        self.check_node(dest)?;

        let index = self.edges.len() as u32;
        self.edges.push(Edge {
            index,
            source,
            dest,
            parameters,
        });
        Ok(index)
    }

    /// Designates the left electrical contact. Calling again overwrites
    /// the previous designation.
    pub fn set_left_lead(&mut self, node: u32) -> Result<(), Error> {
        self.check_lead(node)?;
        self.left_lead = Some(node);
        Ok(())
    }

    /// Designates the right electrical contact. Calling again overwrites
    /// the previous designation.
    pub fn set_right_lead(&mut self, node: u32) -> Result<(), Error> {
        self.check_lead(node)?;
        self.right_lead = Some(node);
        Ok(())
    }

    /// Designates both contacts at once.
    pub fn set_leads(&mut self, left: u32, right: u32) -> Result<(), Error> {
        self.set_left_lead(left)?;
        self.set_right_lead(right)
    }

    #[inline]
    pub fn node_count(&self) -> u32 {
        self.nodes.len() as u32
    }

    #[inline]
    pub fn edge_count(&self) -> u32 {
        self.edges.len() as u32
    }

    #[inline]
    pub fn left_lead(&self) -> Option<u32> {
        self.left_lead
    }

    #[inline]
    pub fn right_lead(&self) -> Option<u32> {
        self.right_lead
    }

    pub fn node(&self, index: u32) -> Option<&Node> {
        self.nodes.get(index as usize)
    }

    pub fn edge(&self, index: u32) -> Option<&Edge> {
        self.edges.get(index as usize)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the index of the first edge connecting `a` and `b`, in
    /// either orientation, if one exists.
    pub fn edge_between(&self, a: u32, b: u32) -> Option<u32> {
        self.edges
            .iter()
            .find(|e| (e.source == a && e.dest == b) || (e.source == b && e.dest == a))
            .map(|e| e.index)
    }

    fn check_node(&self, index: u32) -> Result<(), Error> {
        if index as usize >= self.nodes.len() {
            return Err(Error::NodeIndexOutOfRange {
                index,
                node_count: self.node_count(),
            });
        }
        Ok(())
    }

    fn check_lead(&self, index: u32) -> Result<(), Error> {
        if index as usize >= self.nodes.len() {
            return Err(Error::LeadIndexOutOfRange {
                index,
                node_count: self.node_count(),
            });
        }
        Ok(())
    }
}
