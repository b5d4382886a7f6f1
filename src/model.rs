use std::fmt::Display;

#[derive(Copy,Clone,Debug,Default,PartialEq,Eq,Hash)]
pub enum ResourceType {
    #[default]
    Empty,
    Egg,
    Crystal,
}
impl ResourceType {
    /// Decodes the cell type code of the startup input: 0 empty, 1 eggs, 2 crystals
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Egg),
            2 => Some(Self::Crystal),
            _ => None,
        }
    }
}
impl Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Empty => write!(f, "empty"),
            ResourceType::Egg => write!(f, "eggs"),
            ResourceType::Crystal => write!(f, "crystals"),
        }
    }
}

#[derive(Clone,Debug,Default,PartialEq,Eq)]
pub struct Cell {
    pub resource_type: ResourceType,
    pub resources: u32,
    pub neighbors: Vec<usize>,
    pub own_army: u32,
    pub opponent_army: u32,
}
pub fn crystal_value(resource_type: ResourceType, resources: u32) -> u32 {
    match resource_type {
        ResourceType::Crystal => resources,
        ResourceType::Empty | ResourceType::Egg => 0,
    }
}

/// Fields to merge into an existing cell. The neighbor list is never touched.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct CellUpdate {
    pub resource_type: Option<ResourceType>,
    pub resources: Option<u32>,
    pub own_army: Option<u32>,
    pub opponent_army: Option<u32>,
}
impl CellUpdate {
    pub fn layout(resource_type: ResourceType, resources: u32) -> Self {
        Self {
            resource_type: Some(resource_type),
            resources: Some(resources),
            ..Self::default()
        }
    }

    pub fn turn(resources: u32, own_army: u32, opponent_army: u32) -> Self {
        Self {
            resource_type: None,
            resources: Some(resources),
            own_army: Some(own_army),
            opponent_army: Some(opponent_army),
        }
    }

    pub fn apply(&self, cell: &mut Cell) {
        if let Some(resource_type) = self.resource_type { cell.resource_type = resource_type }
        if let Some(resources) = self.resources { cell.resources = resources }
        if let Some(own_army) = self.own_army { cell.own_army = own_army }
        if let Some(opponent_army) = self.opponent_army { cell.opponent_army = opponent_army }
    }
}

#[derive(Copy,Clone,Debug,PartialEq,Eq)]
pub enum ActionKind {
    Beacon,
    Line,
    Wait,
    Message,
}
impl Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Beacon => write!(f, "BEACON"),
            ActionKind::Line => write!(f, "LINE"),
            ActionKind::Wait => write!(f, "WAIT"),
            ActionKind::Message => write!(f, "MESSAGE"),
        }
    }
}

#[derive(Clone,Debug,PartialEq,Eq)]
pub enum Action {
    Beacon { cell: usize, strength: u32 },
    Line { source: usize, target: usize, strength: u32 },
    Message { text: String },
    Wait,
}
impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Beacon { .. } => ActionKind::Beacon,
            Action::Line { .. } => ActionKind::Line,
            Action::Message { .. } => ActionKind::Message,
            Action::Wait => ActionKind::Wait,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_crystals_have_value() {
        assert_eq!(crystal_value(ResourceType::Crystal, 7), 7);
        assert_eq!(crystal_value(ResourceType::Egg, 7), 0);
        assert_eq!(crystal_value(ResourceType::Empty, 7), 0);
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let mut cell = Cell {
            resource_type: ResourceType::Crystal,
            resources: 12,
            neighbors: vec![1, 2],
            own_army: 3,
            opponent_army: 4,
        };

        CellUpdate { own_army: Some(9), ..CellUpdate::default() }.apply(&mut cell);
        assert_eq!(cell.own_army, 9);
        assert_eq!(cell.resources, 12);
        assert_eq!(cell.resource_type, ResourceType::Crystal);
        assert_eq!(cell.neighbors, vec![1, 2]);

        CellUpdate::turn(5, 0, 1).apply(&mut cell);
        assert_eq!((cell.resources, cell.own_army, cell.opponent_army), (5, 0, 1));
        assert_eq!(cell.resource_type, ResourceType::Crystal);
    }

    #[test]
    fn decodes_cell_type_codes() {
        assert_eq!(ResourceType::from_code(0), Some(ResourceType::Empty));
        assert_eq!(ResourceType::from_code(1), Some(ResourceType::Egg));
        assert_eq!(ResourceType::from_code(2), Some(ResourceType::Crystal));
        assert_eq!(ResourceType::from_code(3), None);
    }

    #[test]
    fn action_kinds_match_protocol_keywords() {
        assert_eq!(Action::Beacon { cell: 0, strength: 1 }.kind().to_string(), "BEACON");
        assert_eq!(Action::Line { source: 0, target: 1, strength: 1 }.kind().to_string(), "LINE");
        assert_eq!(Action::Wait.kind().to_string(), "WAIT");
    }
}
