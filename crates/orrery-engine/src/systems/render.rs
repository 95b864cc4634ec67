use crate::components::depth::DepthOrder;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::Renderable;

/// Build the render buffer from a set of renderables.
/// Groups instances by depth tier, back to front: behind, anchor, front.
/// Within a tier the input order is kept. Sets the tier splits.
pub fn build_render_buffer<'a, R>(items: impl Iterator<Item = &'a R>, buffer: &mut RenderBuffer)
where
    R: Renderable + 'a,
{
    buffer.clear();

    let mut tiers: [Vec<_>; DepthOrder::COUNT] = Default::default();
    for item in items {
        tiers[item.depth().as_u8() as usize].push(item.instance());
    }

    let [behind, anchor, front] = tiers;
    let anchor_start = behind.len() as u32;
    let front_start = anchor_start + anchor.len() as u32;

    for inst in behind.into_iter().chain(anchor).chain(front) {
        buffer.push(inst);
    }
    buffer.set_splits(anchor_start, front_start);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::instance::BodyInstance;

    struct Dot(DepthOrder, f32);

    impl Renderable for Dot {
        fn depth(&self) -> DepthOrder {
            self.0
        }

        fn instance(&self) -> BodyInstance {
            BodyInstance {
                x: self.1,
                depth: self.0.as_u8() as f32,
                ..Default::default()
            }
        }
    }

    #[test]
    fn build_buffer_groups_by_depth() {
        let items = vec![
            Dot(DepthOrder::Front, 1.0),
            Dot(DepthOrder::Behind, 2.0),
            Dot(DepthOrder::Anchor, 3.0),
            Dot(DepthOrder::Behind, 4.0),
            Dot(DepthOrder::Front, 5.0),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(items.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 5);
        assert_eq!(buffer.anchor_start, 2);
        assert_eq!(buffer.front_start, 3);
        let xs: Vec<f32> = buffer.instances.iter().map(|i| i.x).collect();
        assert_eq!(xs, vec![2.0, 4.0, 3.0, 1.0, 5.0]);
    }

    #[test]
    fn rebuild_clears_previous_frame() {
        let mut buffer = RenderBuffer::new();
        build_render_buffer([Dot(DepthOrder::Front, 1.0)].iter(), &mut buffer);
        build_render_buffer(std::iter::empty::<&Dot>(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
        assert_eq!(buffer.front_start, 0);
    }
}
