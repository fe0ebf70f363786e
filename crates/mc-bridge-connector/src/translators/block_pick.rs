//! Bedrock block picking (middle click) translated to Java inventory actions.
//!
//! The client names the target by position only. The block there is mapped
//! to a Java item identifier and looked up in the active inventory view:
//! a hotbar hit selects that hotbar slot, a main-storage hit asks the Java
//! server to pick the item, and a miss spawns a small proxy entity so an
//! open container UI keeps rendering.

use std::ops::RangeInclusive;

use tracing::{debug, trace};

use mc_bridge_proto::java::JavaItemStack;
use mc_bridge_proto::packets::metadata::{flag, key};
use mc_bridge_proto::packets::{AddActor, EntityLink, EntityMetadataEntry};
use mc_bridge_proto::types::{BlockPos, Vec3};
use mc_bridge_world::{item_identity_of, BlockState};

use crate::config::PickBlockSection;
use crate::inventory::{Inventory, HOTBAR_OFFSET, HOTBAR_SLOTS, MAIN_SLOTS};

/// Offset from the player position at which the proxy is spawned.
const PROXY_OFFSET: Vec3 = Vec3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};

/// Session state the resolver reads and the two mutations it may perform.
pub trait PickContext {
    fn block_at(&self, pos: BlockPos) -> BlockState;

    /// Full Java identifier (with state properties) of a block state.
    fn java_identifier_of(&self, state: BlockState) -> Option<&str>;

    /// Java identifier of the item in a slot, `None` if unregistered.
    fn item_identifier_of(&self, stack: &JavaItemStack) -> Option<&str>;

    fn open_inventory(&self) -> Option<&Inventory>;

    fn player_inventory(&self) -> &Inventory;

    fn allocate_entity_id(&mut self) -> i64;

    /// Update the locally cached held hotbar position.
    fn set_held_item_slot(&mut self, hotbar_slot: u8);

    fn player_position(&self) -> Vec3;

    fn player_entity_id(&self) -> i64;
}

/// Cosmetic Bedrock-only entity spawned when nothing could be picked.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyEntity {
    pub entity_id: i64,
    pub identifier: String,
    pub position: Vec3,
    pub scale: f32,
}

impl ProxyEntity {
    /// Flag bits set on every proxy.
    pub const FLAGS: [u32; 2] = [flag::BABY, flag::NO_AI];

    /// Bounding box edge length, matching the half-size shulker.
    pub const BOUNDING_BOX: f32 = 0.5;

    pub fn metadata(&self) -> Vec<EntityMetadataEntry> {
        vec![
            EntityMetadataEntry::flags(&Self::FLAGS),
            EntityMetadataEntry::float(key::SCALE, self.scale),
            EntityMetadataEntry::float(key::BOUNDING_BOX_WIDTH, Self::BOUNDING_BOX),
            EntityMetadataEntry::float(key::BOUNDING_BOX_HEIGHT, Self::BOUNDING_BOX),
        ]
    }

    pub fn to_add_actor(&self) -> AddActor {
        AddActor {
            entity_unique_id: self.entity_id,
            entity_runtime_id: self.entity_id as u64,
            entity_type: self.identifier.clone(),
            position: self.position,
            velocity: Vec3::ZERO,
            pitch: 0.0,
            yaw: 0.0,
            head_yaw: 0.0,
            body_yaw: 0.0,
            metadata: self.metadata(),
            links: Vec::new(),
        }
    }
}

/// Outcome of a pick, in delivery order.
#[derive(Debug, Clone, PartialEq)]
pub enum PickCommand {
    /// Client: select hotbar position 0-8 and hold it.
    SelectHotbarSlot(u8),
    /// Java server: pick the item in this main-storage window slot.
    MoveToHotbar(u16),
    /// Client: spawn the proxy entity.
    SpawnProxy(ProxyEntity),
    /// Client: link the proxy to another entity.
    LinkProxy(EntityLink),
}

/// Hook run after a proxy has been spawned.
pub trait LinkPolicy: Send + Sync {
    fn link(&self, proxy: &ProxyEntity, player_entity_id: i64) -> Option<EntityLink>;
}

/// Leave the proxy unlinked.
pub struct NoLink;

impl LinkPolicy for NoLink {
    fn link(&self, _proxy: &ProxyEntity, _player_entity_id: i64) -> Option<EntityLink> {
        None
    }
}

/// Mount the proxy on the player so a container opened on it stays in
/// range while the player walks.
pub struct MountOnPlayer;

impl LinkPolicy for MountOnPlayer {
    fn link(&self, proxy: &ProxyEntity, player_entity_id: i64) -> Option<EntityLink> {
        Some(EntityLink::passenger(player_entity_id, proxy.entity_id))
    }
}

enum SlotMatch {
    Hotbar(usize),
    Main(usize),
}

/// Resolves Bedrock block-pick requests against a [`PickContext`].
pub struct BlockPickResolver {
    proxy_identifier: String,
    proxy_scale: f32,
    link_policy: Box<dyn LinkPolicy>,
}

impl BlockPickResolver {
    pub fn new(config: &PickBlockSection) -> Self {
        let link_policy: Box<dyn LinkPolicy> = if config.mount_proxy {
            Box::new(MountOnPlayer)
        } else {
            Box::new(NoLink)
        };
        Self {
            proxy_identifier: config.proxy_identifier.clone(),
            proxy_scale: config.proxy_scale,
            link_policy,
        }
    }

    pub fn with_link_policy(mut self, policy: impl LinkPolicy + 'static) -> Self {
        self.link_policy = Box::new(policy);
        self
    }

    /// Resolve a pick at `position`.
    ///
    /// Returns no commands when the block is unknown, exactly one on an
    /// inventory hit, and a proxy spawn (plus any link from the policy)
    /// on a miss. The held slot is updated only on a hotbar hit.
    pub fn resolve(&self, position: BlockPos, ctx: &mut impl PickContext) -> Vec<PickCommand> {
        let state = ctx.block_at(position);
        // Air here usually means chunk caching is off
        if state.is_air() {
            debug!("Block pick at {position} has no known block");
            return Vec::new();
        }

        let Some(java_identifier) = ctx.java_identifier_of(state) else {
            debug!("Block pick at {position}: {state} has no Java identifier");
            return Vec::new();
        };
        let target = item_identity_of(java_identifier).to_owned();

        let found = {
            let inventory = match ctx.open_inventory() {
                Some(open) => open,
                None => ctx.player_inventory(),
            };
            find_slot(&*ctx, inventory, HOTBAR_SLOTS, &target)
                .map(SlotMatch::Hotbar)
                .or_else(|| {
                    find_slot(&*ctx, inventory, MAIN_SLOTS, &target).map(SlotMatch::Main)
                })
        };

        match found {
            Some(SlotMatch::Hotbar(slot)) => {
                let hotbar_slot = (slot - HOTBAR_OFFSET) as u8;
                debug!("Picked {target} from hotbar slot {hotbar_slot}");
                ctx.set_held_item_slot(hotbar_slot);
                vec![PickCommand::SelectHotbarSlot(hotbar_slot)]
            }
            Some(SlotMatch::Main(slot)) => {
                debug!("Picked {target} from inventory slot {slot}");
                vec![PickCommand::MoveToHotbar(slot as u16)]
            }
            None => self.spawn_proxy(ctx, &target),
        }
    }

    fn spawn_proxy(&self, ctx: &mut impl PickContext, target: &str) -> Vec<PickCommand> {
        let proxy = ProxyEntity {
            entity_id: ctx.allocate_entity_id(),
            identifier: self.proxy_identifier.clone(),
            position: ctx.player_position() + PROXY_OFFSET,
            scale: self.proxy_scale,
        };
        debug!(
            "No {target} in inventory, spawning proxy {} at {}",
            proxy.entity_id, proxy.position
        );
        let link = self.link_policy.link(&proxy, ctx.player_entity_id());
        let mut commands = vec![PickCommand::SpawnProxy(proxy)];
        if let Some(link) = link {
            commands.push(PickCommand::LinkProxy(link));
        }
        commands
    }
}

/// First slot in `slots` whose item resolves to `target`.
fn find_slot(
    ctx: &impl PickContext,
    inventory: &Inventory,
    slots: RangeInclusive<usize>,
    target: &str,
) -> Option<usize> {
    slots.into_iter().find(|&slot| {
        let Some(stack) = inventory.item(slot) else {
            return false;
        };
        match ctx.item_identifier_of(stack) {
            Some(identifier) => identifier == target,
            None => {
                trace!("Slot {slot} holds unregistered item {}", stack.id);
                false
            }
        }
    })
}
