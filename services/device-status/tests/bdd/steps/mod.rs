mod dashboard_steps;
