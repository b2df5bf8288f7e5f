use knob_model::{Property, Schema, ecs, graph};
use serde_json::json;

/// Objects the demo inspector can select.
#[derive(Debug, Clone)]
pub(crate) struct Scene {
    entities: Vec<ecs::Entity>,
    nodes: Vec<graph::Node>,
}

impl Scene {
    pub(crate) fn demo() -> Self {
        Self {
            entities: vec![camera(), lamp()],
            nodes: vec![oscillator(), filter()],
        }
    }

    pub(crate) fn entities(&self) -> &[ecs::Entity] {
        &self.entities
    }

    pub(crate) fn nodes(&self) -> &[graph::Node] {
        &self.nodes
    }
}

fn transform() -> ecs::Component {
    ecs::Component::builder("Transform")
        .input(Property::number_array("position", [0.0, 1.5, 6.0]).build())
        .input(
            Property::number("pitch", 0.0)
                .path("rotation.pitch")
                .schema(Schema::new().with_range(-90.0, 90.0).with_precision(1))
                .build(),
        )
        .input(
            Property::number("yaw", 0.0)
                .path("rotation.yaw")
                .schema(Schema::new().with_range(-180.0, 180.0).with_precision(1))
                .build(),
        )
        .input(
            Property::number("scale", 1.0)
                .schema(Schema::new().with_range(0.0, 4.0).with_bar())
                .build(),
        )
        .output(Property::number("distance", 6.18).build())
        .build()
}

fn camera() -> ecs::Entity {
    let lens = ecs::Component::builder("Lens")
        .input(
            Property::number("fov", 60.0)
                .schema(
                    Schema::new()
                        .with_range(10.0, 120.0)
                        .with_step(1.0)
                        .with_precision(0)
                        .with_bar(),
                )
                .build(),
        )
        .input(
            Property::number("projection", 0.0)
                .schema(Schema::new().with_options(["Perspective", "Orthographic"]))
                .build(),
        )
        .input(Property::boolean("enabled", true).build())
        .input(Property::string("label", "Main camera").build())
        .build();

    ecs::Entity::new(Some("Camera"), vec![transform(), lens])
}

fn lamp() -> ecs::Entity {
    let light = ecs::Component::builder("Light")
        .name("Key light")
        .input(
            Property::number("intensity", 2.5)
                .schema(Schema::new().with_range(0.0, 10.0).with_bar())
                .build(),
        )
        .input(Property::number_array("color", [1.0, 0.9, 0.8]).build())
        .input(
            Property::number("mode", 1.0)
                .schema(Schema::new().with_options(["Point", "Spot", "Area"]))
                .build(),
        )
        .input(
            Property::number("flash", 0.0)
                .schema(Schema::new().as_event())
                .build(),
        )
        .output(Property::object("stats", json!({ "lux": 120, "shadows": true })).build())
        .build();

    ecs::Entity::new(Some("Lamp"), vec![transform(), light])
}

fn oscillator() -> graph::Node {
    let oscillator = graph::Component::builder("Oscillator")
        .input(
            Property::number("frequency", 440.0)
                .schema(Schema::new().with_min(0.0).with_precision(1))
                .build(),
        )
        .input(
            Property::number("waveform", 0.0)
                .schema(Schema::new().with_options(["Sine", "Square", "Saw", "Triangle"]))
                .build(),
        )
        .input(
            Property::number("detune", 0.0)
                .path("tuning.detune")
                .schema(Schema::new().with_range(-100.0, 100.0).with_step(1.0))
                .build(),
        )
        .output(Property::number("signal", 0.0).build())
        .build();

    graph::Node::new(Some("Oscillator"), vec![oscillator])
}

fn filter() -> graph::Node {
    let filter = graph::Component::builder("Filter")
        .input(
            Property::number("cutoff", 0.5)
                .schema(Schema::new().with_range(0.0, 1.0).with_bar())
                .build(),
        )
        .input(
            Property::number("resonance", 0.1)
                .schema(Schema::new().with_range(0.0, 1.0).with_step(0.01))
                .build(),
        )
        .input(Property::boolean("bypass", false).build())
        .output(Property::number("signal", 0.0).build())
        .build();

    graph::Node::new(Some("Filter"), vec![filter])
}
