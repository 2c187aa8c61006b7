// Coordinators layer - Workflow orchestration
//
// Coordinators compose provider and store operations for specific API
// endpoints. They decide the sequence of operations and the response shape.

pub mod item_coordinator;

pub use item_coordinator::ItemCoordinator;
