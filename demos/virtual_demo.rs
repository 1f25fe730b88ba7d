use actionrig::backends::virtual_input::VirtualDevice;
use actionrig::presets::{self, MOVE, ROTATE};
use actionrig::{ActionEvent, AxisRole, ControlPath, EventFilter, Hand, InputManager};
use glam::Vec2;

fn main() {
    env_logger::init();

    let mut mgr = InputManager::new();
    presets::register_defaults(mgr.registry_mut());
    mgr.initialize();

    mgr.bus_mut().add_listener(
        |e: &ActionEvent| println!("(Virtual) {} fired", e.action),
        EventFilter::StartedOnly,
        None,
    );

    // Script a short session: walk forward on the left touchpad, turn with E,
    // then open the menu.
    let mut device = VirtualDevice::new("virtual:demo", "Demo Virtual Device");
    device.set_axis_2d(
        ControlPath::steamvr(Hand::Left, "touchpad"),
        Vec2::new(0.0, 0.8),
    );
    device.press(ControlPath::key("E"));
    mgr.add_device(device);

    for frame in 0..3 {
        let fired = mgr.tick();
        println!("frame {frame}: {} action(s)", fired.len());
        if let Some(walk) = mgr.registry().get_input_action(MOVE) {
            println!("  move  = {:?}", walk.axis_value_2d(AxisRole::Y, mgr.frame()));
        }
        if let Some(turn) = mgr.registry().get_input_action(ROTATE) {
            println!("  yaw   = {}", turn.yaw_axis_value(mgr.frame()));
        }
    }

    let mut menu = VirtualDevice::new("virtual:menu", "Demo Menu Button");
    menu.press(ControlPath::key("Escape"));
    mgr.add_device(menu);
    for event in mgr.tick() {
        println!("last frame: {}", event.action);
    }

    mgr.shutdown();
}
