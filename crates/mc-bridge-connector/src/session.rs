//! One Bedrock client's bridge session.
//!
//! Owns the per-player caches and delivers translated packets on two
//! channels: `upstream` to the Bedrock client and `downstream` to the Java
//! server. Network I/O lives behind those channels.

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, trace};

use mc_bridge_proto::error::ProtoError;
use mc_bridge_proto::java::{JavaItemStack, JavaServerboundPacket, PickItem};
use mc_bridge_proto::packets::{
    BlockPickRequest, ClientboundPacket, PlayerHotbar, RemoveEntity, ServerboundPacket,
    SetEntityLink,
};
use mc_bridge_proto::types::{BlockPos, Vec3};
use mc_bridge_world::{BlockState, BlockTranslator, ChunkCache, ItemRegistry, WorldManager};

use crate::config::BridgeConfig;
use crate::entity_cache::{EntityCache, PlayerEntity};
use crate::inventory::{Inventory, InventoryCache};
use crate::translators::block_pick::{BlockPickResolver, PickCommand, PickContext};

pub struct Session<W: WorldManager = ChunkCache> {
    world: W,
    blocks: Arc<BlockTranslator>,
    items: Arc<ItemRegistry>,
    inventory: InventoryCache,
    entities: EntityCache,
    player: PlayerEntity,
    block_pick: Arc<BlockPickResolver>,
    upstream: UnboundedSender<ClientboundPacket>,
    downstream: UnboundedSender<JavaServerboundPacket>,
}

impl Session<ChunkCache> {
    /// Session backed by a chunk cache configured from `config.world`.
    pub fn new(
        config: &BridgeConfig,
        blocks: Arc<BlockTranslator>,
        items: Arc<ItemRegistry>,
        upstream: UnboundedSender<ClientboundPacket>,
        downstream: UnboundedSender<JavaServerboundPacket>,
    ) -> Self {
        Self::with_world(
            config,
            ChunkCache::new(config.world.cache_chunks),
            blocks,
            items,
            upstream,
            downstream,
        )
    }
}

impl<W: WorldManager> Session<W> {
    pub fn with_world(
        config: &BridgeConfig,
        world: W,
        blocks: Arc<BlockTranslator>,
        items: Arc<ItemRegistry>,
        upstream: UnboundedSender<ClientboundPacket>,
        downstream: UnboundedSender<JavaServerboundPacket>,
    ) -> Self {
        let entities = EntityCache::new();
        let player = PlayerEntity {
            entity_id: entities.allocate_entity_id(),
            position: Vec3::ZERO,
        };
        Self {
            world,
            blocks,
            items,
            inventory: InventoryCache::new(),
            entities,
            player,
            block_pick: Arc::new(BlockPickResolver::new(&config.pick_block)),
            upstream,
            downstream,
        }
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn inventory(&self) -> &InventoryCache {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryCache {
        &mut self.inventory
    }

    pub fn entities(&self) -> &EntityCache {
        &self.entities
    }

    pub fn player(&self) -> &PlayerEntity {
        &self.player
    }

    pub fn set_player_position(&mut self, position: Vec3) {
        self.player.position = position;
    }

    /// Replace the block-pick resolver, e.g. to install a custom link policy.
    pub fn set_block_pick_resolver(&mut self, resolver: BlockPickResolver) {
        self.block_pick = Arc::new(resolver);
    }

    /// Decode and translate one client packet body.
    ///
    /// Packets the bridge does not translate are ignored; malformed ones
    /// are logged and dropped.
    pub fn handle_packet(&mut self, packet_id: u32, mut payload: Bytes) {
        match ServerboundPacket::decode(packet_id, &mut payload) {
            Ok(packet) => self.translate(packet),
            Err(ProtoError::UnknownPacketId(id)) => {
                trace!("Ignoring client packet 0x{id:02X}");
            }
            Err(e) => {
                debug!("Bad client packet 0x{packet_id:02X}: {e}");
            }
        }
    }

    pub fn translate(&mut self, packet: ServerboundPacket) {
        match packet {
            ServerboundPacket::BlockPickRequest(request) => self.handle_block_pick(&request),
        }
    }

    fn handle_block_pick(&mut self, request: &BlockPickRequest) {
        trace!(
            "Block pick at {} (hotbar slot {})",
            request.position,
            request.hotbar_slot
        );
        let resolver = Arc::clone(&self.block_pick);
        let commands = resolver.resolve(request.position, self);
        for command in commands {
            self.deliver(command);
        }
    }

    fn deliver(&mut self, command: PickCommand) {
        match command {
            PickCommand::SelectHotbarSlot(slot) => {
                self.send_upstream(ClientboundPacket::PlayerHotbar(PlayerHotbar::select(slot)));
            }
            PickCommand::MoveToHotbar(slot) => {
                self.send_downstream(JavaServerboundPacket::PickItem(PickItem {
                    slot_to_use: slot as i32,
                }));
            }
            PickCommand::SpawnProxy(proxy) => {
                self.entities.track_proxy(proxy.entity_id);
                self.send_upstream(ClientboundPacket::AddActor(proxy.to_add_actor()));
            }
            PickCommand::LinkProxy(link) => {
                self.send_upstream(ClientboundPacket::SetEntityLink(SetEntityLink { link }));
            }
        }
    }

    /// Remove every proxy entity this session spawned from the client.
    /// Returns how many were removed.
    pub fn despawn_proxies(&mut self) -> usize {
        let proxies = self.entities.take_proxies();
        for &entity_unique_id in &proxies {
            self.send_upstream(ClientboundPacket::RemoveEntity(RemoveEntity {
                entity_unique_id,
            }));
        }
        proxies.len()
    }

    fn send_upstream(&self, packet: ClientboundPacket) {
        let id = packet.id();
        if self.upstream.send(packet).is_err() {
            debug!("Client channel closed, dropping packet 0x{id:02X}");
        }
    }

    fn send_downstream(&self, packet: JavaServerboundPacket) {
        let id = packet.id();
        if self.downstream.send(packet).is_err() {
            debug!("Server channel closed, dropping Java packet 0x{id:02X}");
        }
    }
}

impl<W: WorldManager> PickContext for Session<W> {
    fn block_at(&self, pos: BlockPos) -> BlockState {
        self.world.block_at(pos)
    }

    fn java_identifier_of(&self, state: BlockState) -> Option<&str> {
        self.blocks.java_identifier(state)
    }

    fn item_identifier_of(&self, stack: &JavaItemStack) -> Option<&str> {
        self.items
            .lookup(stack)
            .map(|entry| entry.java_identifier.as_str())
    }

    fn open_inventory(&self) -> Option<&Inventory> {
        self.inventory.open_inventory()
    }

    fn player_inventory(&self) -> &Inventory {
        self.inventory.player()
    }

    fn allocate_entity_id(&mut self) -> i64 {
        self.entities.allocate_entity_id()
    }

    fn set_held_item_slot(&mut self, hotbar_slot: u8) {
        self.inventory.set_held_item_slot(hotbar_slot);
    }

    fn player_position(&self) -> Vec3 {
        self.player.position
    }

    fn player_entity_id(&self) -> i64 {
        self.player.entity_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;
    use mc_bridge_proto::codec::ProtoEncode;
    use mc_bridge_proto::packets::id;
    use mc_bridge_world::chunk::ChunkColumn;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    struct Harness {
        session: Session,
        client: UnboundedReceiver<ClientboundPacket>,
        server: UnboundedReceiver<JavaServerboundPacket>,
    }

    fn config(extra: &str) -> BridgeConfig {
        toml::from_str(&format!("[logging]\nlevel = \"debug\"\n{extra}")).unwrap()
    }

    fn harness_with(config: &BridgeConfig) -> Harness {
        let (up_tx, client) = unbounded_channel();
        let (down_tx, server) = unbounded_channel();
        let session = Session::new(
            config,
            Arc::new(BlockTranslator::new()),
            Arc::new(ItemRegistry::new()),
            up_tx,
            down_tx,
        );
        Harness {
            session,
            client,
            server,
        }
    }

    fn harness() -> Harness {
        harness_with(&config(""))
    }

    impl Harness {
        fn place(&mut self, pos: BlockPos, identifier: &str) {
            let state = self.session.blocks.java_state(identifier).unwrap();
            let world = self.session.world_mut();
            if !world.contains_chunk(pos.chunk_pos()) {
                world.cache_chunk(pos.chunk_pos(), ChunkColumn::new());
            }
            world.update_block(pos, state);
        }

        fn give(&mut self, slot: usize, identifier: &str) {
            let java_id = self.session.items.get_by_identifier(identifier).unwrap().java_id;
            self.session
                .inventory_mut()
                .player_mut()
                .set_item(slot, Some(JavaItemStack::new(java_id, 1)));
        }

        fn pick(&mut self, pos: BlockPos) {
            self.session
                .translate(ServerboundPacket::BlockPickRequest(BlockPickRequest {
                    position: pos,
                    add_user_data: false,
                    hotbar_slot: 0,
                }));
        }

        fn assert_quiet(&mut self) {
            assert!(self.client.try_recv().is_err());
            assert!(self.server.try_recv().is_err());
        }
    }

    fn target() -> BlockPos {
        BlockPos::new(10, 64, 10)
    }

    #[test]
    fn pick_air_sends_nothing() {
        let mut h = harness();
        h.give(40, "minecraft:stone");
        h.pick(target());
        h.assert_quiet();
        assert!(h.session.entities().proxies().is_empty());
    }

    #[test]
    fn pick_with_chunk_cache_disabled_sends_nothing() {
        let mut h = harness_with(&config("[world]\ncache_chunks = false\n"));
        h.give(40, "minecraft:stone");
        h.pick(target());
        h.assert_quiet();
    }

    #[test]
    fn hotbar_hit_selects_on_client() {
        let mut h = harness();
        h.place(target(), "minecraft:stone");
        h.give(40, "minecraft:stone");
        h.pick(target());
        assert_eq!(
            h.client.try_recv().unwrap(),
            ClientboundPacket::PlayerHotbar(PlayerHotbar::select(4))
        );
        h.assert_quiet();
        assert_eq!(h.session.inventory().held_item_slot(), 4);
    }

    #[test]
    fn main_storage_hit_sends_pick_item() {
        let mut h = harness();
        h.place(target(), "minecraft:dirt");
        h.give(20, "minecraft:dirt");
        h.pick(target());
        assert_eq!(
            h.server.try_recv().unwrap(),
            JavaServerboundPacket::PickItem(PickItem { slot_to_use: 20 })
        );
        h.assert_quiet();
        assert_eq!(h.session.inventory().held_item_slot(), 0);
    }

    #[test]
    fn log_matches_item_without_properties() {
        let mut h = harness();
        h.place(target(), "minecraft:oak_log[axis=x]");
        h.give(36, "minecraft:oak_log");
        h.pick(target());
        assert_eq!(
            h.client.try_recv().unwrap(),
            ClientboundPacket::PlayerHotbar(PlayerHotbar::select(0))
        );
    }

    #[test]
    fn miss_spawns_tracked_proxy() {
        let mut h = harness();
        h.place(target(), "minecraft:bedrock");
        h.session.set_player_position(Vec3::new(0.0, 70.0, 0.0));
        h.pick(target());

        let ClientboundPacket::AddActor(actor) = h.client.try_recv().unwrap() else {
            panic!("expected AddActor");
        };
        assert_eq!(actor.entity_type, "minecraft:shulker");
        assert_eq!(actor.position, Vec3::new(0.0, 71.0, 0.0));
        assert_ne!(actor.entity_unique_id, h.session.player().entity_id);
        assert_eq!(h.session.entities().proxies(), &[actor.entity_unique_id]);
        h.assert_quiet();
    }

    #[test]
    fn mounted_proxy_is_linked_to_player() {
        let mut h = harness_with(&config("[pick_block]\nmount_proxy = true\n"));
        h.place(target(), "minecraft:bedrock");
        h.pick(target());

        let ClientboundPacket::AddActor(actor) = h.client.try_recv().unwrap() else {
            panic!("expected AddActor");
        };
        let ClientboundPacket::SetEntityLink(link) = h.client.try_recv().unwrap() else {
            panic!("expected SetEntityLink");
        };
        assert_eq!(link.link.from_unique_id, h.session.player().entity_id);
        assert_eq!(link.link.to_unique_id, actor.entity_unique_id);
        h.assert_quiet();
    }

    #[test]
    fn despawn_removes_every_proxy() {
        let mut h = harness();
        h.place(target(), "minecraft:bedrock");
        h.pick(target());
        h.pick(target());
        let spawned: Vec<i64> = std::iter::from_fn(|| h.client.try_recv().ok())
            .map(|packet| match packet {
                ClientboundPacket::AddActor(actor) => actor.entity_unique_id,
                other => panic!("unexpected packet {other:?}"),
            })
            .collect();
        assert_eq!(spawned.len(), 2);
        assert_ne!(spawned[0], spawned[1]);

        assert_eq!(h.session.despawn_proxies(), 2);
        for id in spawned {
            assert_eq!(
                h.client.try_recv().unwrap(),
                ClientboundPacket::RemoveEntity(RemoveEntity {
                    entity_unique_id: id
                })
            );
        }
        assert_eq!(h.session.despawn_proxies(), 0);
        h.assert_quiet();
    }

    #[test]
    fn handle_packet_decodes_block_pick() {
        let mut h = harness();
        h.place(target(), "minecraft:dirt");
        h.give(15, "minecraft:dirt");
        let mut buf = BytesMut::new();
        BlockPickRequest {
            position: target(),
            add_user_data: false,
            hotbar_slot: 2,
        }
        .proto_encode(&mut buf);
        h.session
            .handle_packet(id::BLOCK_PICK_REQUEST, buf.freeze());
        assert_eq!(
            h.server.try_recv().unwrap(),
            JavaServerboundPacket::PickItem(PickItem { slot_to_use: 15 })
        );
    }

    #[test]
    fn malformed_and_unknown_packets_are_dropped() {
        let mut h = harness();
        h.session
            .handle_packet(id::BLOCK_PICK_REQUEST, Bytes::from_static(&[0x02]));
        h.session.handle_packet(0x7F, Bytes::new());
        h.assert_quiet();
    }

    #[test]
    fn closed_client_channel_does_not_panic() {
        let mut h = harness();
        h.place(target(), "minecraft:bedrock");
        h.client.close();
        h.pick(target());
        assert_eq!(h.session.entities().proxies().len(), 1);
    }
}
