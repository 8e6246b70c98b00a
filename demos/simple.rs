use core::time::Duration;

use devorient::{
    ControlsParams, DeviceOrientation, DeviceOrientationControls, EulerYxz, ScreenOrientationType,
    SensorBridge, Transform,
};

fn main() {
    let dt = Duration::from_secs_f32(1.0 / 60.0);

    let bridge = SensorBridge::new();
    bridge.attach();

    let params = ControlsParams {
        movement_speed: 5.0,
        auto_forward: true,
        ..ControlsParams::default()
    };
    let mut controls =
        DeviceOrientationControls::with_params(&bridge, Transform::default(), params);
    controls.connect();

    // Sensor events as a browser would deliver them
    let events = [
        DeviceOrientation::default(),
        DeviceOrientation::new(0.0, 90.0, 0.0),
        DeviceOrientation::new(35.0, 88.0, -2.0),
        DeviceOrientation::new(40.0, 80.0, 5.0),
        DeviceOrientation::new(45.0, 75.0, 10.0),
    ];

    for (tick, event) in events.iter().enumerate() {
        bridge.on_device_orientation(*event);
        if tick == 3 {
            let landscape = Some(ScreenOrientationType::LandscapePrimary);
            bridge.on_screen_orientation_change(landscape, None);
        }

        let object = controls.update(dt);
        let euler = EulerYxz::from_rotation(&object.rotation);
        println!(
            "tick {tick}: yaw {:7.2} pitch {:7.2} roll {:7.2} position {:?} aligned {}",
            euler.y.to_degrees(),
            euler.x.to_degrees(),
            euler.z.to_degrees(),
            object.position.as_slice(),
            !controls.params().auto_align,
        );
    }

    controls.disconnect();
    bridge.detach();
}
