mod helpers;
mod router_test;
mod species_test;
