mod products_tests;
mod relay_route_tests;
